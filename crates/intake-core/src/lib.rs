//! # Intake Core
//!
//! Pure-logic core of the buyer intake pipeline: everything a form needs to
//! seed, mirror, and validate a buyer's contact fields, with no I/O and no
//! async machinery.
//!
//! ## Components
//!
//! - **[`resolve`]**: merges any number of candidate identity sources
//!   (saved draft, VIP buyer profile, backend profile, identity-provider
//!   claims) into a single [`IdentityRecord`], field by field, strictly in
//!   the order the caller supplies.
//! - **[`phone`]**: keystroke-safe display formatting for US phone numbers
//!   and structural dialability checking.
//! - **[`currency`]**: comma-grouped mirroring of numeric input and
//!   recovery of the numeric value at submission time.
//!
//! ## Guarantees
//!
//! Every operation here is a total, deterministic function of its arguments:
//! no blocking, no retries, no shared state, nothing to shut down. Callers
//! fetch candidate data however they like (and substitute an absent
//! candidate when a fetch fails); this crate only decides what wins.
//!
//! ```rust
//! use intake_core::{resolve, CandidateFields};
//!
//! let draft = CandidateFields::new().first_name("Sam");
//! let vip = CandidateFields::new()
//!     .first_name("Samuel")
//!     .last_name("Rivera")
//!     .phone("3035551212");
//!
//! let merged = resolve(&[draft, vip]);
//! assert_eq!(merged.first_name, "Sam");
//! assert_eq!(merged.last_name, "Rivera");
//! assert_eq!(merged.phone, "(303) 555-1212");
//! ```

pub mod currency;
pub mod phone;
pub mod record;
pub mod resolver;

pub use currency::{format_amount, parse_amount};
pub use phone::{format_phone, is_valid_us_phone};
pub use record::{CandidateFields, IdentityRecord};
pub use resolver::resolve;
