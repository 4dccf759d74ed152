use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::UsersApi;
use crate::errors::MarketError;
use crate::models::user::{ContactUpdate, User};

/// Profile reads and the address-edit flow.
pub struct Account<A> {
    api: Arc<A>,
}

impl<A: UsersApi> Account<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn me(&self) -> Result<User, MarketError> {
        Ok(self.api.me().await?)
    }

    pub async fn update_contact(
        &self,
        phone: &str,
        address: &str,
    ) -> Result<User, MarketError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(DomainError::Validation("Please enter a phone number".to_string()).into());
        }
        let address = address.trim();
        if address.is_empty() {
            return Err(DomainError::MissingAddress.into());
        }
        Ok(self
            .api
            .update_contact(ContactUpdate {
                phone: phone.to_string(),
                address: address.to_string(),
            })
            .await?)
    }
}

/// A shipping address as the edit form fields see it. The profile
/// stores one comma-separated string with the city last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub detail: String,
    pub ward: String,
    pub district: String,
    pub city: String,
}

/// Join the form fields back into the stored single-string form,
/// skipping whatever was left blank.
pub fn compose_address(detail: &str, ward: &str, district: &str, city: &str) -> String {
    [detail, ward, district, city]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split a stored address into form fields, reading from the city end.
/// Anything beyond the three named segments stays in `detail`, so this
/// inverts `compose_address` for fully-populated inputs.
pub fn split_address(address: &str) -> AddressParts {
    let parts: Vec<&str> = address.rsplit(", ").collect();
    AddressParts {
        city: parts.first().copied().unwrap_or("").to_string(),
        district: parts.get(1).copied().unwrap_or("").to_string(),
        ward: parts.get(2).copied().unwrap_or("").to_string(),
        detail: parts
            .get(3..)
            .map(|rest| {
                rest.iter()
                    .rev()
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_skips_blank_parts() {
        assert_eq!(
            compose_address("12 Ly Thuong Kiet", "", "District 10", "HCMC"),
            "12 Ly Thuong Kiet, District 10, HCMC"
        );
        assert_eq!(compose_address("", "", "", ""), "");
    }

    #[test]
    fn split_reads_from_the_city_end() {
        let parts = split_address("12 Ly Thuong Kiet, Ward 14, District 10, HCMC");
        assert_eq!(parts.detail, "12 Ly Thuong Kiet");
        assert_eq!(parts.ward, "Ward 14");
        assert_eq!(parts.district, "District 10");
        assert_eq!(parts.city, "HCMC");
    }

    #[test]
    fn split_with_extra_detail_segments() {
        let parts = split_address("Room 5, Block B, Ward 14, District 10, HCMC");
        assert_eq!(parts.detail, "Room 5, Block B");
        assert_eq!(parts.city, "HCMC");
    }

    #[test]
    fn split_of_a_short_address_leaves_fields_empty() {
        let parts = split_address("HCMC");
        assert_eq!(parts.city, "HCMC");
        assert_eq!(parts.district, "");
        assert_eq!(parts.ward, "");
        assert_eq!(parts.detail, "");
    }

    #[test]
    fn compose_then_split_round_trips_full_addresses() {
        let composed = compose_address("12 Ly Thuong Kiet", "Ward 14", "District 10", "HCMC");
        let parts = split_address(&composed);
        assert_eq!(
            parts,
            AddressParts {
                detail: "12 Ly Thuong Kiet".to_string(),
                ward: "Ward 14".to_string(),
                district: "District 10".to_string(),
                city: "HCMC".to_string(),
            }
        );
    }
}
