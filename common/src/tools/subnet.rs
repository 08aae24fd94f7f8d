use std::net::Ipv4Addr;

use crate::games::SessionRng;

pub const QUIZ_MIN_PREFIX: u8 = 16;
pub const QUIZ_MAX_PREFIX: u8 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubnetInfo {
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// Every address in the block, network and broadcast included.
    pub total_addresses: u64,
}

impl SubnetInfo {
    pub fn calculate(address: Ipv4Addr, prefix: u8) -> Result<Self, String> {
        let mask_bits = prefix_to_mask(prefix)?;
        Ok(Self::from_mask(address, prefix, mask_bits))
    }

    fn from_mask(address: Ipv4Addr, prefix: u8, mask_bits: u32) -> Self {
        let network = u32::from(address) & mask_bits;
        let broadcast = network | !mask_bits;

        Self {
            address,
            prefix,
            mask: Ipv4Addr::from(mask_bits),
            network: Ipv4Addr::from(network),
            broadcast: Ipv4Addr::from(broadcast),
            total_addresses: 1u64 << (32 - prefix as u32),
        }
    }
}

pub fn prefix_to_mask(prefix: u8) -> Result<u32, String> {
    match prefix {
        0 => Ok(0),
        1..=32 => Ok(u32::MAX << (32 - prefix as u32)),
        _ => Err(format!("Prefix length must be between 0 and 32, got {}", prefix)),
    }
}

/// Parses `a.b.c.d/nn`.
pub fn parse_cidr_notation(input: &str) -> Result<(Ipv4Addr, u8), String> {
    let (address, prefix) = input
        .trim()
        .split_once('/')
        .ok_or_else(|| format!("Expected address/prefix, got '{}'", input.trim()))?;

    let address: Ipv4Addr = address
        .trim()
        .parse()
        .map_err(|e| format!("Invalid IPv4 address '{}': {}", address.trim(), e))?;
    let prefix: u8 = prefix
        .trim()
        .parse()
        .map_err(|e| format!("Invalid prefix length '{}': {}", prefix.trim(), e))?;
    prefix_to_mask(prefix)?;

    Ok((address, prefix))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswer {
    pub subnet_mask: String,
    pub total_addresses: String,
    pub network_address: String,
    pub broadcast_address: String,
}

impl QuizAnswer {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVerdict {
    Correct,
    Incorrect { expected: QuizAnswer },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubnetQuestion {
    pub info: SubnetInfo,
}

impl SubnetQuestion {
    pub fn new(address: Ipv4Addr, prefix: u8) -> Result<Self, String> {
        Ok(Self {
            info: SubnetInfo::calculate(address, prefix)?,
        })
    }

    /// Random address, prefix between /16 and /28.
    pub fn generate(rng: &mut SessionRng) -> Self {
        let address = Ipv4Addr::from(rng.random::<u32>());
        let prefix = rng.random_range(QUIZ_MIN_PREFIX..=QUIZ_MAX_PREFIX);
        let mask_bits = u32::MAX << (32 - prefix as u32);
        Self {
            info: SubnetInfo::from_mask(address, prefix, mask_bits),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "What are the subnet mask, total number of hosts, network address, and broadcast address for {} /{}?",
            self.info.address, self.info.prefix
        )
    }

    pub fn expected_answer(&self) -> QuizAnswer {
        QuizAnswer {
            subnet_mask: self.info.mask.to_string(),
            total_addresses: self.info.total_addresses.to_string(),
            network_address: self.info.network.to_string(),
            broadcast_address: self.info.broadcast.to_string(),
        }
    }

    /// Exact string comparison of every field after trimming whitespace.
    pub fn check(&self, answer: &QuizAnswer) -> QuizVerdict {
        let expected = self.expected_answer();
        let correct = answer.subnet_mask.trim() == expected.subnet_mask
            && answer.total_addresses.trim() == expected.total_addresses
            && answer.network_address.trim() == expected.network_address
            && answer.broadcast_address.trim() == expected.broadcast_address;

        if correct {
            QuizVerdict::Correct
        } else {
            QuizVerdict::Incorrect { expected }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_c_slash_24() {
        let info = SubnetInfo::calculate(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();

        assert_eq!(info.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(info.total_addresses, 256);
    }

    #[test]
    fn test_odd_prefix() {
        let info = SubnetInfo::calculate(Ipv4Addr::new(10, 20, 77, 200), 19).unwrap();

        assert_eq!(info.mask, Ipv4Addr::new(255, 255, 224, 0));
        assert_eq!(info.network, Ipv4Addr::new(10, 20, 64, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(10, 20, 95, 255));
        assert_eq!(info.total_addresses, 8192);
    }

    #[test]
    fn test_prefix_edges() {
        let all = SubnetInfo::calculate(Ipv4Addr::new(8, 8, 8, 8), 0).unwrap();
        assert_eq!(all.mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(all.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(all.total_addresses, 1 << 32);

        let host = SubnetInfo::calculate(Ipv4Addr::new(8, 8, 8, 8), 32).unwrap();
        assert_eq!(host.network, Ipv4Addr::new(8, 8, 8, 8));
        assert_eq!(host.broadcast, Ipv4Addr::new(8, 8, 8, 8));
        assert_eq!(host.total_addresses, 1);
    }

    #[test]
    fn test_prefix_out_of_range() {
        assert!(SubnetInfo::calculate(Ipv4Addr::new(1, 2, 3, 4), 33).is_err());
    }

    #[test]
    fn test_block_edges_for_non_octet_prefix() {
        let info = SubnetInfo::calculate(Ipv4Addr::new(172, 16, 5, 4), 22).unwrap();

        assert_eq!(info.network, Ipv4Addr::new(172, 16, 4, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(172, 16, 7, 255));
    }

    #[test]
    fn test_parse_cidr_notation() {
        assert_eq!(
            parse_cidr_notation(" 192.168.1.10/24 ").unwrap(),
            (Ipv4Addr::new(192, 168, 1, 10), 24)
        );
        assert!(parse_cidr_notation("192.168.1.10").is_err());
        assert!(parse_cidr_notation("192.168.1.300/24").is_err());
        assert!(parse_cidr_notation("192.168.1.10/40").is_err());
    }

    #[test]
    fn test_generated_questions_stay_in_quiz_range() {
        let mut rng = SessionRng::new(99);

        for _ in 0..200 {
            let question = SubnetQuestion::generate(&mut rng);
            assert!((QUIZ_MIN_PREFIX..=QUIZ_MAX_PREFIX).contains(&question.info.prefix));
            let address = u32::from(question.info.address);
            assert!(address >= u32::from(question.info.network));
            assert!(address <= u32::from(question.info.broadcast));
        }
    }

    #[test]
    fn test_prompt_mentions_address_and_prefix() {
        let question = SubnetQuestion::new(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();

        assert!(question.prompt().ends_with("for 192.168.1.10 /24?"));
    }

    #[test]
    fn test_correct_answer_with_whitespace() {
        let question = SubnetQuestion::new(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
        let answer = QuizAnswer {
            subnet_mask: " 255.255.255.0".to_string(),
            total_addresses: "256 ".to_string(),
            network_address: "192.168.1.0".to_string(),
            broadcast_address: "\t192.168.1.255".to_string(),
        };

        assert_eq!(question.check(&answer), QuizVerdict::Correct);
    }

    #[test]
    fn test_wrong_answer_reports_expected_values() {
        let question = SubnetQuestion::new(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
        let answer = QuizAnswer {
            subnet_mask: "255.255.255.0".to_string(),
            total_addresses: "254".to_string(),
            network_address: "192.168.1.0".to_string(),
            broadcast_address: "192.168.1.255".to_string(),
        };

        match question.check(&answer) {
            QuizVerdict::Incorrect { expected } => assert_eq!(expected.total_addresses, "256"),
            QuizVerdict::Correct => panic!("expected an incorrect verdict"),
        }
    }
}
