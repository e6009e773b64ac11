//! Multi-source identity field resolution.
//!
//! Forms seed their editable fields from several places at once: a locally
//! saved draft, the VIP buyer profile, the backend user profile, and the
//! identity provider's claims. The caller ranks those candidates; this
//! module merges them one field at a time, first come first filled.

use crate::phone::format_phone;
use crate::record::{CandidateFields, IdentityRecord};

/// Merge candidate sources into a single [`IdentityRecord`].
///
/// Sources are consulted in slice order (index 0 = most authoritative).
/// For each field, the first source supplying a non-empty value wins; a
/// filled field is never revisited, even if a later source is more
/// complete overall. Phone values are passed through
/// [`format_phone`] on the way in, so the merged record's phone is always
/// canonical-or-empty.
///
/// After a source's direct fields are considered, its combined
/// `full_name` (if any) may fill whichever of first/last name is still
/// empty: first whitespace token into `first_name`, the remaining tokens
/// joined by single spaces into `last_name`. A single-token name fills
/// only `first_name`, and a name containing `@` is rejected outright;
/// identity providers fall back to the email address as a display name,
/// and that must never be split into name parts.
///
/// Resolution is a pure function: zero sources yield an all-empty record,
/// never an error.
pub fn resolve(sources: &[CandidateFields]) -> IdentityRecord {
    let mut merged = IdentityRecord::default();

    for source in sources {
        fill(&mut merged.first_name, source.first_name.as_deref());
        fill(&mut merged.last_name, source.last_name.as_deref());
        fill(&mut merged.email, source.email.as_deref());
        fill_phone(&mut merged.phone, source.phone.as_deref());
        fill(&mut merged.buyer_type, source.buyer_type.as_deref());

        if let Some(name) = source.full_name.as_deref() {
            apply_name_split(&mut merged, name);
        }
    }

    merged
}

/// Copy `value` into `slot` when the slot is still empty and the value is
/// non-empty after trimming.
fn fill(slot: &mut String, value: Option<&str>) {
    if !slot.is_empty() {
        return;
    }
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *slot = trimmed.to_string();
        }
    }
}

/// Like [`fill`], but the stored value is the canonical display form. A
/// value with no digits formats to empty and leaves the slot open for
/// lower-priority sources.
fn fill_phone(slot: &mut String, value: Option<&str>) {
    if !slot.is_empty() {
        return;
    }
    if let Some(value) = value {
        let formatted = format_phone(value);
        if !formatted.is_empty() {
            *slot = formatted;
        }
    }
}

fn apply_name_split(merged: &mut IdentityRecord, name: &str) {
    if !merged.first_name.is_empty() && !merged.last_name.is_empty() {
        return;
    }
    let name = name.trim();
    if name.is_empty() || name.contains('@') {
        return;
    }

    let mut tokens = name.split_whitespace();
    let first = match tokens.next() {
        Some(first) => first,
        None => return,
    };
    let rest = tokens.collect::<Vec<_>>().join(" ");

    if merged.first_name.is_empty() {
        merged.first_name = first.to_string();
    }
    if merged.last_name.is_empty() && !rest.is_empty() {
        merged.last_name = rest;
    }
}
