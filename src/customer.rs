//! Customer profile record and its writable attributes.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A customer profile.
///
/// `date_of_birth` is kept exactly as it was seeded; nothing parses or
/// compares it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer attribute that a partial update may overwrite.
///
/// `id`, `created_at` and `updated_at` are deliberately absent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
    DateOfBirth,
}

impl Field {
    /// The fields a PATCH must name at least one of.
    pub const UPDATABLE: [Field; 3] = [Field::PhoneNumber, Field::Address, Field::Email];

    /// Maps a JSON key to a writable attribute.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "first_name"    => Some(Self::FirstName),
            "last_name"     => Some(Self::LastName),
            "email"         => Some(Self::Email),
            "phone_number"  => Some(Self::PhoneNumber),
            "address"       => Some(Self::Address),
            "date_of_birth" => Some(Self::DateOfBirth),
            _               => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName   => "first_name",
            Self::LastName    => "last_name",
            Self::Email       => "email",
            Self::PhoneNumber => "phone_number",
            Self::Address     => "address",
            Self::DateOfBirth => "date_of_birth",
        }
    }

    pub fn is_updatable(self) -> bool {
        Self::UPDATABLE.contains(&self)
    }
}

impl Customer {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName   => &mut self.first_name,
            Field::LastName    => &mut self.last_name,
            Field::Email       => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Address     => &mut self.address,
            Field::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value;
    }
}

/// The three profiles every process starts with.
pub fn seed() -> Vec<Customer> {
    let seeded_at = Utc
        .with_ymd_and_hms(2025, 1, 1, 10, 0, 0)
        .single()
        .expect("seed timestamp is a valid UTC instant");

    let row = |id, first: &str, last: &str, phone: &str, address: &str, dob: &str| Customer {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone_number: phone.to_owned(),
        address: address.to_owned(),
        date_of_birth: dob.to_owned(),
        created_at: seeded_at,
        updated_at: seeded_at,
    };

    vec![
        row(1, "Julia", "Kordick", "+1-555-0123", "123 Main St, New York, NY 10001", "1985-03-15"),
        row(2, "Alexander", "Wachtel", "+1-555-0456", "456 Oak Ave, Boston, MA 02101", "1978-11-22"),
        row(3, "Igor", "Rykhlevskyi", "+1-555-0789", "789 Pine Rd, San Francisco, CA 94102", "1990-07-08"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_match_published_profiles() {
        let rows = seed();
        assert_eq!(rows.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[0].email, "julia.kordick@example.com");
        assert_eq!(rows[1].email, "alexander.wachtel@example.com");
        assert_eq!(rows[2].email, "igor.rykhlevskyi@example.com");
        assert!(rows.iter().all(|c| c.created_at == c.updated_at));
    }

    #[test]
    fn serializes_timestamps_as_rfc3339() {
        let json = serde_json::to_value(&seed()[0]).unwrap();
        assert_eq!(json["created_at"], "2025-01-01T10:00:00Z");
        assert_eq!(json["date_of_birth"], "1985-03-15");
    }

    #[test]
    fn field_keys_round_trip_and_exclude_managed_columns() {
        for key in ["first_name", "last_name", "email", "phone_number", "address", "date_of_birth"] {
            assert_eq!(Field::from_key(key).map(Field::as_str), Some(key));
        }
        for key in ["id", "created_at", "updated_at", "nickname"] {
            assert_eq!(Field::from_key(key), None);
        }
        assert!(Field::Email.is_updatable());
        assert!(!Field::FirstName.is_updatable());
    }
}
