mod legacy_policy;
mod markers;
mod outcome;
mod resolve_file;
mod resolve_text;

pub use self::{
    legacy_policy::*, markers::*, outcome::*, resolve_file::*, resolve_text::*,
};
