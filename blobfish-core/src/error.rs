//! Error types for the blobfish core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::MaskSource`] accessors.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MaskSourceError {
    /// Requested coordinates were outside the mask's bounds.
    #[error("coordinates ({x}, {y}) are outside a {width}x{height} mask")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Mask width in pixels.
        width: usize,
        /// Mask height in pixels.
        height: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MaskSourceError`] variants.
    enum MaskSourceErrorCode for MaskSourceError {
        /// Requested coordinates were outside the mask's bounds.
        OutOfBounds => OutOfBounds { .. } => "MASK_SOURCE_OUT_OF_BOUNDS",
    }
}

/// An error produced by [`crate::DisjointForest`] operations.
///
/// Both variants signal a caller contract violation: the forest itself never
/// fails once its inputs satisfy the preconditions.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// An element id outside `[0, len)` was passed to `find` or an accessor.
    #[error("element {index} is outside the forest of {len} slots")]
    OutOfRange {
        /// The offending element id.
        index: usize,
        /// Number of slots in the forest.
        len: usize,
    },
    /// A non-root slot was passed to `union`; callers must `find` first.
    #[error("element {id} is not a root")]
    NotARoot {
        /// The slot that was expected to be a root.
        id: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// An element id outside `[0, len)` was passed to `find` or an accessor.
        OutOfRange => OutOfRange { .. } => "FOREST_OUT_OF_RANGE",
        /// A non-root slot was passed to `union`.
        NotARoot => NotARoot { .. } => "FOREST_NOT_A_ROOT",
    }
}

/// Error type produced when constructing or running [`crate::Detector`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DetectorError {
    /// At least one blob must be requested.
    #[error("blob_count must be at least 1 (got {got})")]
    InvalidBlobCount {
        /// The invalid blob count supplied by the caller.
        got: usize,
    },
    /// A forest contract was violated while labeling or ranking.
    #[error("disjoint forest operation failed: {error}")]
    Forest {
        /// Underlying forest error bubbled up by the engine.
        #[from]
        error: ForestError,
    },
    /// A [`crate::MaskSource`] accessor failed while running the engine.
    #[error("mask source `{mask}` failed: {error}")]
    Mask {
        /// Identifier for the mask source that produced the error.
        mask: Arc<str>,
        #[source]
        /// Underlying mask source error bubbled up by the engine.
        error: MaskSourceError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DetectorError`] variants.
    enum DetectorErrorCode for DetectorError {
        /// At least one blob must be requested.
        InvalidBlobCount => InvalidBlobCount { .. } => "BLOBFISH_INVALID_BLOB_COUNT",
        /// A forest contract was violated while labeling or ranking.
        ForestFailure => Forest { .. } => "BLOBFISH_FOREST_FAILURE",
        /// A [`crate::MaskSource`] accessor failed while running the engine.
        MaskSourceFailure => Mask { .. } => "BLOBFISH_MASK_SOURCE_FAILURE",
    }
}

impl DetectorError {
    /// Retrieve the inner [`MaskSourceErrorCode`] when the error originated in a [`crate::MaskSource`].
    pub const fn mask_source_code(&self) -> Option<MaskSourceErrorCode> {
        match self {
            Self::Mask { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`ForestErrorCode`] when the error originated in the forest.
    pub const fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Forest { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DetectorError>;
