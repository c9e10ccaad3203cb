//! A JSON-LD 1.1 processor.
//!
//! This crate implements the document-rewriting algorithms that give
//! [JSON-LD](https://www.w3.org/TR/json-ld/) its RDF graph semantics:
//! context processing, expansion, compaction, flattening (node-map
//! construction), framing, and conversion to and from RDF quads.
//!
//! The four representations of a JSON-LD document and the operations
//! that move between them:
//!
//! ```text
//! compact  --expand-->  expanded  --flatten-->  flattened
//!    ^                     |  ^                     |
//!    |                     |  |                     |
//!    +------compact--------+  +-------frame---------+
//!                          |
//!                       to_rdf / from_rdf
//!                          v
//!                        quads
//! ```
//!
//! The entry point for most users is the [`processor`] module's
//! [`JsonLdProcessor`] trait, implemented for [`json_syntax::Value`].

pub mod blank;
pub mod compaction;
pub mod container;
pub mod context;
pub mod context_processing;
pub mod direction;
pub mod document;
pub mod error;
pub mod expansion;
pub mod flattening;
pub mod framing;
pub mod id;
pub(crate) mod json_util;
pub mod keyword;
pub mod lang;
pub mod loader;
pub mod mode;
pub mod negotiation;
pub mod nullable;
pub mod object;
pub mod processor;
pub mod rdf;
pub mod term;
pub mod warning;

pub use container::{Container, ContainerKind};
pub use context::{Context, TermDefinition};
pub use direction::Direction;
pub use document::ExpandedDocument;
pub use error::Error;
pub use id::Id;
pub use keyword::Keyword;
pub use mode::ProcessingMode;
pub use nullable::Nullable;
pub use object::{Indexed, Node, Object, Value};
pub use processor::{JsonLdProcessor, Options};
pub use term::Term;
pub use warning::Warning;

/// Re-exported so downstream crates can match the exact `iref`/`rdf-types`
/// versions this crate was built against without pinning them separately.
pub use iref;
pub use json_syntax;
pub use rdf_types;

/// A node or blank node identifier, concrete over owned IRI/blank-node buffers.
///
/// The teacher crate (`json-ld` 0.19) threads a generic `Vocabulary`
/// interning layer through every type so that IRIs and blank node ids can be
/// stored as small interned keys instead of owned strings. We deliberately
/// do not: the teacher itself treats the non-interning vocabulary (`()`,
/// `rdf_types::vocabulary::no_vocabulary`) as the simple/default case (see
/// its `IdentifyAll::identify_all` and `Relabel::relabel` convenience
/// methods), and threading the interning parameter through every struct in
/// this crate would multiply its size without changing the algorithms the
/// specification describes. See `DESIGN.md`.
pub type IriBuf = iref::IriBuf;
pub type BlankIdBuf = rdf_types::BlankIdBuf;
