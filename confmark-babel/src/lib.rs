//! Markdown ⇄ storage-format conversion for the confmark toolchain
//!
//!     This crate provides the two document converters behind the confmark CLI:
//!     the Markdown → storage-format renderer and the storage → Markdown "light"
//!     reducer. Both are pure string-to-string transforms: no I/O, no environment
//!     access, no state beyond a single call.
//!
//! Architecture
//!
//!     Conversions are exposed through the Converter trait (./convert.rs) and
//!     discovered through the ConverterRegistry (./registry.rs), so the CLI can
//!     treat every direction uniformly. The actual work lives in two modules:
//!
//!     ├── error.rs
//!     ├── convert.rs              # Converter trait definition
//!     ├── registry.rs             # ConverterRegistry for discovery and selection
//!     ├── storage
//!     │   ├── block.rs            # line-scanning block state machine
//!     │   ├── inline.rs           # inline span substitution
//!     │   └── rules.rs            # RenderRules knobs
//!     ├── markdown
//!     │   ├── reducer.rs          # regex-chain reduction
//!     │   └── rules.rs            # ReduceRules knobs
//!     └── lib.rs
//!
//! The Storage Format
//!
//!     The target is a wiki backend's storage representation: a restricted
//!     HTML-like vocabulary (p, h1-h6, ul/ol/li, blockquote, pre/code, table,
//!     strong, em, code, a). The renderer is a single pass over the input lines
//!     with one open block context at a time; inline spans are rewritten by a
//!     fixed sequence of regex passes after escaping. It is deliberately
//!     permissive: malformed Markdown degrades to paragraph text, it never
//!     errors.
//!
//! Lossiness
//!
//!     The reducer is the approximate inverse, not an inverse. It reconstructs
//!     headings (h1-h3), paragraphs, inline styles, links, flat lists and code,
//!     then strips whatever markup remains. Tables, blockquotes and nesting do
//!     not survive, and reduce(render(md)) is allowed to differ from md. Callers
//!     that need fidelity must keep the Markdown source.
//!
//! Library Choices
//!
//!     The whole point of this crate is the hand-rolled converter, so unlike the
//!     rest of the ecosystem we do not delegate to a Markdown or HTML crate. The
//!     only runtime dependencies are `regex` (with `once_cell` for the compiled
//!     pattern tables) and `serde` for the rule structs the config layer reads.

pub mod convert;
pub mod error;
pub mod markdown;
pub mod registry;
pub mod storage;

pub use convert::Converter;
pub use error::ConvertError;
pub use registry::ConverterRegistry;

pub use markdown::{reduce_to_markdown, MarkdownLightFormat, ReduceRules};
pub use storage::{render_storage, RenderRules, StorageFormat};
