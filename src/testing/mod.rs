pub mod fake_generation_client;

pub use fake_generation_client::{FakeGenerationClient, FakeReply};
