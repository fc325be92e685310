use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a frame was not accepted. Declaration order is rule precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    NoFace,
    MultipleFaces,
    NotFrontal,
    TooDark,
    /// Face occupies too little of the frame; the user should move closer.
    TooClose,
    /// Face fills too much of the frame; the user should move back.
    TooFar,
    NotCentered,
    LowConfidence,
}

impl RejectionReason {
    pub const ALL: &'static [RejectionReason] = &[
        RejectionReason::NoFace,
        RejectionReason::MultipleFaces,
        RejectionReason::NotFrontal,
        RejectionReason::TooDark,
        RejectionReason::TooClose,
        RejectionReason::TooFar,
        RejectionReason::NotCentered,
        RejectionReason::LowConfidence,
    ];
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionReason::NoFace => "no face",
            RejectionReason::MultipleFaces => "multiple faces",
            RejectionReason::NotFrontal => "not frontal",
            RejectionReason::TooDark => "too dark",
            RejectionReason::TooClose => "too close",
            RejectionReason::TooFar => "too far",
            RejectionReason::NotCentered => "not centered",
            RejectionReason::LowConfidence => "low confidence",
        };
        f.write_str(label)
    }
}

/// Outcome of one quality evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn instruction(&self) -> Instruction {
        match self {
            Verdict::Accepted => Instruction::ImageAccepted,
            Verdict::Rejected(RejectionReason::NoFace) => Instruction::NoFaceDetected,
            Verdict::Rejected(RejectionReason::MultipleFaces) => Instruction::SingleFaceOnly,
            Verdict::Rejected(RejectionReason::NotFrontal) => Instruction::FaceTheCamera,
            Verdict::Rejected(RejectionReason::TooDark) => Instruction::MoveToLight,
            Verdict::Rejected(RejectionReason::TooClose) => Instruction::MoveCloser,
            Verdict::Rejected(RejectionReason::TooFar) => Instruction::MoveBack,
            Verdict::Rejected(RejectionReason::NotCentered) => Instruction::CenterFace,
            Verdict::Rejected(RejectionReason::LowConfidence) => {
                Instruction::UncoverFaceAndFaceCamera
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("accepted"),
            Verdict::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

/// Identity of the user-facing message. Text and localization live in the
/// presentation layer; only [`Instruction::id`] crosses this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Shown while no capture session is sampling.
    EnableCamera,
    ImageAccepted,
    NoFaceDetected,
    SingleFaceOnly,
    FaceTheCamera,
    MoveToLight,
    MoveCloser,
    MoveBack,
    CenterFace,
    UncoverFaceAndFaceCamera,
}

impl Instruction {
    pub fn id(&self) -> &'static str {
        match self {
            Instruction::EnableCamera => "enable_camera",
            Instruction::ImageAccepted => "image_accepted",
            Instruction::NoFaceDetected => "no_face_detected",
            Instruction::SingleFaceOnly => "single_face_only",
            Instruction::FaceTheCamera => "face_the_camera",
            Instruction::MoveToLight => "move_to_light",
            Instruction::MoveCloser => "move_closer",
            Instruction::MoveBack => "move_back",
            Instruction::CenterFace => "center_face",
            Instruction::UncoverFaceAndFaceCamera => "uncover_face_and_face_camera",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
