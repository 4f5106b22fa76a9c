// NBS (Note Block Studio) song data model: binary decoder, layers, notes

mod error;
mod instrument;
mod layer;
mod model;
mod note;
mod parse;
pub mod stream;

pub use error::NbsError;
pub use instrument::CustomInstrument;
pub use layer::Layer;
pub use model::{NbsSong, SUPPORTED_VERSION, TEMPO_FACTOR};
pub use note::Note;
pub use parse::NbsDecoder;
