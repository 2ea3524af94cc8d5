//! Branch Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type with its monthly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRate {
    pub title: String,
    pub rate_per_month: Decimal,
}

/// Nearby landmark with travel details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimeLocationPerk {
    pub title: String,
    pub distance: String,
    pub time_to_reach: String,
}

/// Branch entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    /// Set by the backend when a thumbnail is uploaded; never sent by the client
    pub thumbnail: Option<String>,
    pub contact_no: Vec<String>,
    pub email: Option<String>,
    pub address: String,
    pub room_rate: Vec<RoomRate>,
    pub reg_fee: Decimal,
    pub is_mess_available: bool,
    /// Only meaningful while `is_mess_available` is true
    pub mess_price: Option<Decimal>,
    #[serde(default)]
    pub prime_location_perks: Vec<PrimeLocationPerk>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create branch payload
///
/// Identity, timestamps and the derived thumbnail are server-owned and
/// therefore absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchInput {
    pub name: String,
    pub contact_no: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    pub room_rate: Vec<RoomRate>,
    pub reg_fee: Decimal,
    pub is_mess_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mess_price: Option<Decimal>,
    #[serde(default)]
    pub prime_location_perks: Vec<PrimeLocationPerk>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Update branch payload
///
/// Absent fields are omitted from the serialized body entirely, so the
/// backend leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_rate: Option<Vec<RoomRate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mess_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mess_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prime_location_perks: Option<Vec<PrimeLocationPerk>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}
