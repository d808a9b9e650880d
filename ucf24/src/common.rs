//! Common imports from external crates.

pub use crate::error::{Error, Result};
pub use bbox::{prelude::*, HW, TLBR};
pub use indexmap::IndexMap;
pub use itertools::Itertools as _;
pub use label::{Label, PixelLabel};
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashSet,
    fmt, fs,
    ops::Range,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};
pub use strum::{EnumCount as _, IntoEnumIterator as _};
