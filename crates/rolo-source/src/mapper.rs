//! Maps raw generator records to domain contacts.
//!
//! Validation happens once here, at the fetch boundary: a record missing its
//! id or both name parts is a schema error for the whole batch rather than a
//! silently empty contact.

use rolo_types::{Avatar, Contact, ContactId, Origin};

use crate::error::{Error, Result};
use crate::schema::RawUser;

pub(crate) fn map_user(index: usize, raw: &RawUser) -> Result<Contact> {
    let uuid = raw
        .login
        .as_ref()
        .and_then(|l| l.uuid.as_deref())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Schema(format!("record {}: missing login.uuid", index)))?;

    let name = raw
        .name
        .as_ref()
        .ok_or_else(|| Error::Schema(format!("record {}: missing name", index)))?;
    let first = name.first.clone().unwrap_or_default();
    let last = name.last.clone().unwrap_or_default();
    if first.is_empty() && last.is_empty() {
        return Err(Error::Schema(format!("record {}: name has no parts", index)));
    }

    // Phone falls back to the cell number; both absent is tolerable.
    let phone = raw
        .phone
        .clone()
        .or_else(|| raw.cell.clone())
        .unwrap_or_default();

    let avatar = raw.picture.as_ref().and_then(|p| {
        let thumbnail = p.thumbnail.clone()?;
        let large = p.large.clone().unwrap_or_else(|| thumbnail.clone());
        Some(Avatar { thumbnail, large })
    });

    Ok(Contact {
        id: ContactId::new(uuid),
        first_name: first,
        last_name: last,
        email: raw.email.clone().unwrap_or_default(),
        phone,
        avatar,
        origin: Origin::Remote,
    })
}

/// Map a full generator batch, preserving order.
pub(crate) fn map_batch(raw: &[RawUser]) -> Result<Vec<Contact>> {
    raw.iter()
        .enumerate()
        .map(|(i, user)| map_user(i, user))
        .collect()
}
