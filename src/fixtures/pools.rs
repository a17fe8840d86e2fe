// Candidate value pools for fixture generation.
//
// Values are the ones the dashboard frontend was built against; keeping them
// verbatim keeps the generated records familiar to anyone testing the UI.

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery",
    "Parker", "Quinn", "Sarah", "Michael", "Emma", "James", "Olivia",
    "William", "Sophia", "Benjamin", "Isabella", "Lucas", "Mia", "Henry",
    "Charlotte", "Alexander", "Amelia", "Owen", "Harper", "Sebastian",
    "Evelyn", "Jackson", "Abigail", "Aiden", "Emily", "Matthew", "Elizabeth",
    "Samuel", "Mila", "David", "Ella", "Joseph", "Grace", "Carter",
    "Victoria", "Wyatt", "Aria", "John", "Scarlett", "Jack", "Chloe", "Luke",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Garcia", "Johnson", "Jones", "Miller",
    "Rodriguez", "Smith", "Taylor", "Wilson", "Martinez", "Lee", "White",
    "Harris", "Clark", "Lewis", "Robinson", "Walker", "Perez", "Hall",
    "Young", "Allen", "Sanchez", "Wright", "King", "Scott", "Green", "Baker",
    "Adams", "Nelson", "Carter", "Mitchell", "Parker", "Evans", "Turner",
    "Diaz", "Collins", "Stewart", "Morris", "Murphy", "Cook", "Rogers",
    "Reed", "Bailey", "Cooper", "Richardson", "Cox", "Howard", "Ward",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "outlook.com", "yahoo.com", "icloud.com", "protonmail.com",
    "hotmail.com", "fastmail.com", "zoho.com", "aol.com", "mail.com",
    "tutanota.com", "hey.com",
];

pub const COMPANIES: &[&str] = &[
    "TechCorp", "DataSystems", "CloudWorks", "InnovateLab", "DigitalSphere",
    "NextGen Solutions", "Quantum Dynamics", "Apex Technologies",
    "Fusion Enterprises", "Stellar Industries", "Pinnacle Group",
    "Velocity Labs", "Synergy Corp", "Catalyst Ventures", "Zenith Solutions",
];

pub const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "Los Angeles, CA", "Chicago, IL",
    "Boston, MA", "Seattle, WA", "Austin, TX", "Denver, CO", "Atlanta, GA",
    "Miami, FL", "London, UK", "Berlin, Germany", "Toronto, Canada",
    "Sydney, Australia", "Tokyo, Japan", "Paris, France",
    "Amsterdam, Netherlands", "Stockholm, Sweden", "Zurich, Switzerland",
];

pub const DEVICES: &[&str] = &[
    "Chrome on Windows 11", "Safari on macOS", "Chrome on macOS",
    "Firefox on Ubuntu", "Edge on Windows 11", "Safari on iOS",
    "Chrome on Android", "Firefox on Windows 10",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_non_empty() {
        assert_eq!(FIRST_NAMES.len(), 50);
        assert_eq!(LAST_NAMES.len(), 50);
        assert_eq!(EMAIL_DOMAINS.len(), 12);
        assert_eq!(COMPANIES.len(), 15);
        assert_eq!(LOCATIONS.len(), 19);
        assert_eq!(DEVICES.len(), 8);
    }

    #[test]
    fn test_email_domains_have_no_at_sign() {
        for domain in EMAIL_DOMAINS {
            assert!(!domain.contains('@'), "bad domain: {}", domain);
        }
    }
}
