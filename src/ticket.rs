use std::fmt;

use serde::Deserialize;

/// A booked ticket. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketRecord {
    pub number: u32,
    pub passenger: String,
    pub destination: String,
}

impl TicketRecord {
    pub fn new(number: u32, passenger: &str, destination: &str) -> Self {
        return Self {
            number,
            passenger: passenger.to_string(),
            destination: destination.to_string(),
        };
    }
}

impl fmt::Display for TicketRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.number, self.passenger, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = TicketRecord::new(501, "Aisha", "dubai");
        assert_eq!(record.to_string(), "501-Aisha-dubai");
    }

    #[test]
    fn test_record_from_yaml() {
        let yaml = "number: 502\npassenger: Ahmed\ndestination: london\n";
        let Ok(record) = serde_yaml::from_str::<TicketRecord>(yaml) else {
            panic!("record must parse");
        };
        assert_eq!(record, TicketRecord::new(502, "Ahmed", "london"));
    }
}
