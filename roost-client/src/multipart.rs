//! Multipart encoding for branch payloads
//!
//! When a thumbnail accompanies a branch create/update, the request body
//! switches from structured JSON to multipart form data: scalar fields
//! become plain text parts, list fields are JSON-encoded strings the
//! backend decodes, and the binary rides in the `thumbnail` part. Both
//! encodings must describe the same logical record; the flattening is kept
//! separate from form assembly so that equivalence is testable.

use shared::models::{BranchInput, BranchUpdate};

use crate::{ClientResult, ImageAttachment};

/// Flatten a create payload into multipart text fields
pub(crate) fn branch_input_fields(
    input: &BranchInput,
) -> ClientResult<Vec<(&'static str, String)>> {
    let mut fields = vec![
        ("name", input.name.clone()),
        ("address", input.address.clone()),
        ("contact_no", serde_json::to_string(&input.contact_no)?),
        ("room_rate", serde_json::to_string(&input.room_rate)?),
        ("reg_fee", input.reg_fee.to_string()),
        ("is_mess_available", input.is_mess_available.to_string()),
        (
            "prime_location_perks",
            serde_json::to_string(&input.prime_location_perks)?,
        ),
        ("amenities", serde_json::to_string(&input.amenities)?),
    ];
    if let Some(email) = &input.email {
        fields.push(("email", email.clone()));
    }
    if let Some(price) = &input.mess_price {
        fields.push(("mess_price", price.to_string()));
    }
    Ok(fields)
}

/// Flatten an update payload; absent fields stay absent, mirroring the
/// JSON partial-update rule
pub(crate) fn branch_update_fields(
    update: &BranchUpdate,
) -> ClientResult<Vec<(&'static str, String)>> {
    let mut fields = Vec::new();
    if let Some(name) = &update.name {
        fields.push(("name", name.clone()));
    }
    if let Some(address) = &update.address {
        fields.push(("address", address.clone()));
    }
    if let Some(contact_no) = &update.contact_no {
        fields.push(("contact_no", serde_json::to_string(contact_no)?));
    }
    if let Some(email) = &update.email {
        fields.push(("email", email.clone()));
    }
    if let Some(room_rate) = &update.room_rate {
        fields.push(("room_rate", serde_json::to_string(room_rate)?));
    }
    if let Some(reg_fee) = &update.reg_fee {
        fields.push(("reg_fee", reg_fee.to_string()));
    }
    if let Some(available) = &update.is_mess_available {
        fields.push(("is_mess_available", available.to_string()));
    }
    if let Some(price) = &update.mess_price {
        fields.push(("mess_price", price.to_string()));
    }
    if let Some(perks) = &update.prime_location_perks {
        fields.push(("prime_location_perks", serde_json::to_string(perks)?));
    }
    if let Some(amenities) = &update.amenities {
        fields.push(("amenities", serde_json::to_string(amenities)?));
    }
    Ok(fields)
}

/// Assemble the final form: text fields plus the binary `thumbnail` part
pub(crate) fn to_form(
    fields: Vec<(&'static str, String)>,
    thumbnail: &ImageAttachment,
) -> ClientResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    Ok(form.part("thumbnail", thumbnail.to_part()?))
}
