use crate::common::*;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The number of action classes in UCF101-24.
pub const NUM_CLASSES: usize = 24;

/// The label reported for a frame that has no ground truth.
///
/// It lies outside of the class range so that consumers can tell it apart
/// from any real class index.
pub const NO_GT_LABEL: usize = 9999;

/// Training sampling stride per class, in frames.
///
/// Frequent classes are sampled sparsely and rare classes densely, which
/// balances the per-class box counts without duplicating frames. Indexed by
/// [ActionClass::index].
pub const TRAIN_STRIDES: [f64; NUM_CLASSES] = [
    1.1, 0.8, 4.7, 1.4, 0.9, 2.6, 2.2, 3.0, 3.0, 5.0, 6.2, 2.7, 3.5, 3.1, 4.3, 2.5, 4.5, 3.4, 6.7,
    3.6, 1.6, 3.4, 0.6, 4.3,
];

/// The action classes of UCF101-24 in alphabetical order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Deserialize,
)]
#[serde(try_from = "usize")]
pub enum ActionClass {
    Basketball,
    BasketballDunk,
    Biking,
    CliffDiving,
    CricketBowling,
    Diving,
    Fencing,
    FloorGymnastics,
    GolfSwing,
    HorseRiding,
    IceDancing,
    LongJump,
    PoleVault,
    RopeClimbing,
    SalsaSpin,
    SkateBoarding,
    Skiing,
    Skijet,
    SoccerJuggling,
    Surfing,
    TennisSwing,
    TrampolineJumping,
    VolleyballSpiking,
    WalkingWithDog,
}

impl ActionClass {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The sampling stride of this class for a video of the given split.
    ///
    /// Test videos use twice the training stride.
    pub fn stride(self, is_train: bool) -> f64 {
        let step = TRAIN_STRIDES[self.index()];
        if is_train {
            step
        } else {
            step * 2.0
        }
    }
}

impl TryFrom<usize> for ActionClass {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| {
            format!(
                "class index {} is out of range, expect less than {}",
                index, NUM_CLASSES
            )
        })
    }
}
