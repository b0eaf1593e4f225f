//! Error types for the wgraph core library.
//!
//! Every failure raised by the graph store and the disjoint-set structure is an
//! invalid-argument condition: an index outside the configured bounds or a
//! weight that cannot describe an edge. Malformed-but-harmless input such as a
//! self-loop is reported through boolean return values instead.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSets`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// Requested element was outside `[0, size)`.
    #[error("element {element} is out of range for {size} disjoint-set entries")]
    ElementOutOfRange {
        /// The element supplied by the caller.
        element: usize,
        /// Number of entries tracked by the structure.
        size: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// Requested element was outside the structure's bounds.
        ElementOutOfRange => ElementOutOfRange { .. } => "DISJOINT_SET_ELEMENT_OUT_OF_RANGE",
    }
}

/// Error type produced by [`crate::WeightedGraph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was outside `[0, capacity)`.
    #[error("vertex {vertex} is out of range for a graph with capacity {capacity}")]
    VertexOutOfRange {
        /// The vertex supplied by the caller.
        vertex: usize,
        /// Vertex capacity of the graph.
        capacity: usize,
    },
    /// Edge weights must not be negative.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
        /// The rejected weight.
        weight: f64,
    },
    /// Edge weights must be finite.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
    },
    /// A graph cannot be created with a negative vertex capacity.
    #[error("vertex capacity must not be negative (got {got})")]
    NegativeCapacity {
        /// The rejected capacity.
        got: i64,
    },
    /// The disjoint-set structure rejected an element.
    #[error(transparent)]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was outside the graph's bounds.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Edge weights must not be negative.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// Edge weights must be finite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A graph cannot be created with a negative vertex capacity.
        NegativeCapacity => NegativeCapacity { .. } => "GRAPH_NEGATIVE_CAPACITY",
        /// The disjoint-set structure rejected an element.
        DisjointSetFailure => DisjointSet(..) => "GRAPH_DISJOINT_SET_FAILURE",
    }
}

impl GraphError {
    /// Returns `true` when the error reports an invalid argument.
    ///
    /// Every variant currently does; callers that only care about the broad
    /// class should match on this rather than on individual variants.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::VertexOutOfRange { .. }
                | Self::NegativeWeight { .. }
                | Self::NonFiniteWeight { .. }
                | Self::NegativeCapacity { .. }
                | Self::DisjointSet(_)
        )
    }

    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// a [`crate::DisjointSets`] call.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
