//! Branch form assembly
//!
//! Holds the editable projection of a branch (scalar text fields, four
//! growable field groups and a pending thumbnail) and reduces it back
//! into a create/update payload on submit. Trimming and filtering happen
//! only at reduction time, never at keystroke time.

use base64::Engine as _;
use rust_decimal::Decimal;
use thiserror::Error;

use roost_client::ImageAttachment;
use shared::models::{Branch, BranchInput, BranchUpdate, PrimeLocationPerk, RoomRate};

use super::FieldGroup;

/// Field-level validation failure, reported inline next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Editable room-rate row; the amount stays raw text until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomRateEntry {
    pub title: String,
    pub rate_per_month: String,
}

/// Editable location-perk row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerkEntry {
    pub title: String,
    pub distance: String,
    pub time_to_reach: String,
}

/// What the thumbnail slot would display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailPreview {
    None,
    /// Thumbnail already persisted server-side
    Existing(String),
    /// Pending local file, rendered as a data URL
    Pending(String),
}

/// Editable projection of a branch
#[derive(Debug, Clone, Default)]
pub struct BranchForm {
    pub name: String,
    pub address: String,
    pub email: String,
    pub reg_fee: String,
    pub is_mess_available: bool,
    pub mess_price: String,
    pub contact_no: FieldGroup<String>,
    pub room_rates: FieldGroup<RoomRateEntry>,
    pub amenities: FieldGroup<String>,
    pub perks: FieldGroup<PerkEntry>,
    pending_thumbnail: Option<ImageAttachment>,
    current_thumbnail: Option<String>,
}

impl BranchForm {
    /// Create-mode defaults: every group holds one blank entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit-mode seeding from a fetched branch; empty list fields still
    /// seed one blank entry
    pub fn from_branch(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            address: branch.address.clone(),
            email: branch.email.clone().unwrap_or_default(),
            reg_fee: branch.reg_fee.to_string(),
            is_mess_available: branch.is_mess_available,
            mess_price: branch
                .mess_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
            contact_no: FieldGroup::seed(branch.contact_no.clone()),
            room_rates: FieldGroup::seed(
                branch
                    .room_rate
                    .iter()
                    .map(|rate| RoomRateEntry {
                        title: rate.title.clone(),
                        rate_per_month: rate.rate_per_month.to_string(),
                    })
                    .collect(),
            ),
            amenities: FieldGroup::seed(branch.amenities.clone()),
            perks: FieldGroup::seed(
                branch
                    .prime_location_perks
                    .iter()
                    .map(|perk| PerkEntry {
                        title: perk.title.clone(),
                        distance: perk.distance.clone(),
                        time_to_reach: perk.time_to_reach.clone(),
                    })
                    .collect(),
            ),
            pending_thumbnail: None,
            current_thumbnail: branch.thumbnail.clone(),
        }
    }

    // ============ Thumbnail ============

    /// Select a new local file, replacing any pending one
    pub fn set_thumbnail(&mut self, file: ImageAttachment) {
        self.pending_thumbnail = Some(file);
    }

    /// Discard the unsaved local selection; the persisted thumbnail (if
    /// any) is untouched and becomes the preview again
    pub fn clear_thumbnail(&mut self) {
        self.pending_thumbnail = None;
    }

    /// The file that would be attached on submit
    pub fn pending_thumbnail(&self) -> Option<&ImageAttachment> {
        self.pending_thumbnail.as_ref()
    }

    /// Preview reflects the pending file first, then the persisted one
    pub fn preview(&self) -> ThumbnailPreview {
        match (&self.pending_thumbnail, &self.current_thumbnail) {
            (Some(file), _) => ThumbnailPreview::Pending(data_url(file)),
            (None, Some(url)) => ThumbnailPreview::Existing(url.clone()),
            (None, None) => ThumbnailPreview::None,
        }
    }

    // ============ Validation and reduction ============

    /// Pre-submission checks; an empty list means the form may be sent
    pub fn validate(&self) -> Vec<FieldError> {
        match self.build() {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Reduce the form into a create payload
    pub fn to_input(&self) -> Result<BranchInput, Vec<FieldError>> {
        self.build()
    }

    /// Reduce the form into a full update payload
    ///
    /// Every field is present: the form edits the whole record, so a
    /// cleared email goes out as the empty string rather than being
    /// silently left unchanged. The thumbnail is never part of the
    /// payload; it travels as an attachment or not at all.
    pub fn to_update(&self) -> Result<BranchUpdate, Vec<FieldError>> {
        let input = self.build()?;
        Ok(BranchUpdate {
            name: Some(input.name),
            contact_no: Some(input.contact_no),
            email: Some(input.email.unwrap_or_default()),
            address: Some(input.address),
            room_rate: Some(input.room_rate),
            reg_fee: Some(input.reg_fee),
            is_mess_available: Some(input.is_mess_available),
            mess_price: input.mess_price,
            prime_location_perks: Some(input.prime_location_perks),
            amenities: Some(input.amenities),
        })
    }

    fn build(&self) -> Result<BranchInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Branch name is required"));
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Address is required"));
        }

        let email = match self.email.trim() {
            "" => None,
            value if is_valid_email(value) => Some(value.to_string()),
            _ => {
                errors.push(FieldError::new("email", "Invalid email address"));
                None
            }
        };

        let reg_fee = if self.reg_fee.trim().is_empty() {
            errors.push(FieldError::new("reg_fee", "Registration fee is required"));
            None
        } else {
            parse_amount("reg_fee", &self.reg_fee, &mut errors)
        };

        // Mess price only matters while the mess is available
        let mess_price = if self.is_mess_available && !self.mess_price.trim().is_empty() {
            parse_amount("mess_price", &self.mess_price, &mut errors)
        } else {
            None
        };

        // Room-rate rows with both fields blank are dropped; a kept row
        // needs a title and a numeric rate
        let mut room_rate = Vec::new();
        for (index, entry) in self.room_rates.entries().iter().enumerate() {
            if entry.title.trim().is_empty() && entry.rate_per_month.trim().is_empty() {
                continue;
            }
            if entry.title.trim().is_empty() {
                errors.push(FieldError::new(
                    "room_rate",
                    format!("Room type {} needs a title", index + 1),
                ));
                continue;
            }
            match entry.rate_per_month.trim().parse::<Decimal>() {
                Ok(rate) => room_rate.push(RoomRate {
                    title: entry.title.clone(),
                    rate_per_month: rate,
                }),
                Err(_) => errors.push(FieldError::new(
                    "room_rate",
                    format!("Room type {} needs a numeric rate", index + 1),
                )),
            }
        }

        let contact_no = filter_blank(self.contact_no.entries());
        let amenities = filter_blank(self.amenities.entries());

        // A perk row survives when any of its three fields carries content
        let prime_location_perks: Vec<PrimeLocationPerk> = self
            .perks
            .entries()
            .iter()
            .filter(|perk| {
                !(perk.title.trim().is_empty()
                    && perk.distance.trim().is_empty()
                    && perk.time_to_reach.trim().is_empty())
            })
            .map(|perk| PrimeLocationPerk {
                title: perk.title.clone(),
                distance: perk.distance.clone(),
                time_to_reach: perk.time_to_reach.clone(),
            })
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BranchInput {
            name: self.name.clone(),
            contact_no,
            email,
            address: self.address.clone(),
            room_rate,
            reg_fee: reg_fee.unwrap_or_default(),
            is_mess_available: self.is_mess_available,
            mess_price,
            prime_location_perks,
            amenities,
        })
    }
}

/// Blank and whitespace-only entries are filtered; kept entries stay verbatim
fn filter_blank(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .collect()
}

fn parse_amount(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    match value.trim().parse::<Decimal>() {
        Ok(amount) => Some(amount),
        Err(_) => {
            errors.push(FieldError::new(field, "Must be a number"));
            None
        }
    }
}

/// Conventional address shape: non-empty local part, one `@`, dotted domain
fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Synchronous preview encoding for the just-selected file
fn data_url(file: &ImageAttachment) -> String {
    format!(
        "data:{};base64,{}",
        file.content_type,
        base64::engine::general_purpose::STANDARD.encode(&file.bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BranchForm {
        let mut form = BranchForm::new();
        form.name = "Lakeview".to_string();
        form.address = "12 Lake Rd".to_string();
        form.reg_fee = "1000".to_string();
        *form.contact_no.get_mut(0).unwrap() = "+91-9876543210".to_string();
        *form.room_rates.get_mut(0).unwrap() = RoomRateEntry {
            title: "Single".to_string(),
            rate_per_month: "8500".to_string(),
        };
        form
    }

    fn sample_branch() -> Branch {
        Branch {
            id: 7,
            name: "Lakeview".to_string(),
            thumbnail: Some("https://img.example/old.jpg".to_string()),
            contact_no: vec!["+91-9876543210".to_string()],
            email: None,
            address: "12 Lake Rd".to_string(),
            room_rate: vec![RoomRate {
                title: "Single".to_string(),
                rate_per_month: Decimal::new(8500, 0),
            }],
            reg_fee: Decimal::new(1000, 0),
            is_mess_available: false,
            mess_price: None,
            prime_location_perks: Vec::new(),
            amenities: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_name_and_address_are_required() {
        let form = BranchForm::new();
        let errors = form.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"address"));
    }

    #[test]
    fn test_invalid_email_is_rejected_blank_is_not() {
        let mut form = filled_form();
        form.email = "not-an-address".to_string();
        assert!(form.validate().iter().any(|e| e.field == "email"));

        form.email = "  ".to_string();
        assert!(form.validate().is_empty());

        form.email = "front@lakeview.example".to_string();
        let input = form.to_input().unwrap();
        assert_eq!(input.email.as_deref(), Some("front@lakeview.example"));
    }

    #[test]
    fn test_non_numeric_amounts_are_rejected() {
        let mut form = filled_form();
        form.reg_fee = "one thousand".to_string();
        assert!(form.validate().iter().any(|e| e.field == "reg_fee"));

        let mut form = filled_form();
        form.is_mess_available = true;
        form.mess_price = "3k".to_string();
        assert!(form.validate().iter().any(|e| e.field == "mess_price"));

        let mut form = filled_form();
        form.room_rates.get_mut(0).unwrap().rate_per_month = "cheap".to_string();
        assert!(form.validate().iter().any(|e| e.field == "room_rate"));
    }

    #[test]
    fn test_all_blank_contact_list_reduces_to_empty_not_error() {
        let mut form = filled_form();
        *form.contact_no.get_mut(0).unwrap() = "   ".to_string();
        form.contact_no.push_blank();

        let input = form.to_input().unwrap();
        assert!(input.contact_no.is_empty());
    }

    #[test]
    fn test_perk_kept_iff_any_field_has_content() {
        let mut form = filled_form();
        *form.perks.get_mut(0).unwrap() = PerkEntry {
            title: String::new(),
            distance: "500m".to_string(),
            time_to_reach: String::new(),
        };
        form.perks.push_blank();

        let input = form.to_input().unwrap();
        assert_eq!(input.prime_location_perks.len(), 1);
        assert_eq!(input.prime_location_perks[0].distance, "500m");
        assert_eq!(input.prime_location_perks[0].title, "");
    }

    #[test]
    fn test_mess_price_dropped_when_mess_unavailable() {
        let mut form = filled_form();
        form.is_mess_available = false;
        form.mess_price = "3200".to_string();

        let input = form.to_input().unwrap();
        assert!(input.mess_price.is_none());

        form.is_mess_available = true;
        let input = form.to_input().unwrap();
        assert_eq!(input.mess_price, Some(Decimal::new(3200, 0)));
    }

    #[test]
    fn test_room_rate_order_is_preserved() {
        let mut form = filled_form();
        form.room_rates.push_blank();
        *form.room_rates.get_mut(1).unwrap() = RoomRateEntry {
            title: "Double".to_string(),
            rate_per_month: "6000".to_string(),
        };

        let input = form.to_input().unwrap();
        let titles: Vec<&str> = input.room_rate.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Single", "Double"]);
    }

    #[test]
    fn test_seeding_substitutes_blanks_for_empty_lists() {
        let form = BranchForm::from_branch(&sample_branch());
        assert_eq!(form.amenities.len(), 1);
        assert_eq!(form.perks.len(), 1);
        assert_eq!(form.contact_no.entries()[0], "+91-9876543210");
        assert_eq!(form.room_rates.entries()[0].rate_per_month, "8500");
    }

    #[test]
    fn test_thumbnail_replace_and_revert() {
        let mut form = BranchForm::from_branch(&sample_branch());
        assert_eq!(
            form.preview(),
            ThumbnailPreview::Existing("https://img.example/old.jpg".to_string())
        );

        let file = ImageAttachment::from_bytes("new.png", "image/png", vec![1, 2, 3]);
        form.set_thumbnail(file.clone());
        assert_eq!(
            form.preview(),
            ThumbnailPreview::Pending("data:image/png;base64,AQID".to_string())
        );
        assert_eq!(form.pending_thumbnail(), Some(&file));

        // Removing the selection reverts to the persisted thumbnail
        form.clear_thumbnail();
        assert_eq!(
            form.preview(),
            ThumbnailPreview::Existing("https://img.example/old.jpg".to_string())
        );
        assert!(form.pending_thumbnail().is_none());
    }

    #[test]
    fn test_create_mode_clear_reverts_to_no_preview() {
        let mut form = filled_form();
        form.set_thumbnail(ImageAttachment::from_bytes("a.png", "image/png", vec![9]));
        form.clear_thumbnail();
        assert_eq!(form.preview(), ThumbnailPreview::None);
    }

    #[test]
    fn test_update_payload_carries_every_field_but_no_thumbnail() {
        let mut form = filled_form();
        form.email = String::new();
        let update = form.to_update().unwrap();

        assert_eq!(update.name.as_deref(), Some("Lakeview"));
        // Cleared email is sent as the empty string so the backend overwrites it
        assert_eq!(update.email.as_deref(), Some(""));
        let json = serde_json::to_value(&update).unwrap();
        assert!(!json.as_object().unwrap().contains_key("thumbnail"));
    }

    #[test]
    fn test_nothing_is_trimmed_at_keystroke_time() {
        let mut form = filled_form();
        *form.contact_no.get_mut(0).unwrap() = "  +91-9876543210  ".to_string();
        let input = form.to_input().unwrap();
        // Kept entries stay verbatim; only fully blank ones are dropped
        assert_eq!(input.contact_no, vec!["  +91-9876543210  ".to_string()]);
    }
}
