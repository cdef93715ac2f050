pub mod error;
pub mod message;
pub mod reason;
pub mod version;

mod denormalize;
mod normalize;

pub use message::{Message, MessageBody};
pub use reason::ReasonPhrase;

// Mapper between the structured document and typed http messages.
// Stateless, both directions build a fresh message per call.
pub struct MessageMapper;
