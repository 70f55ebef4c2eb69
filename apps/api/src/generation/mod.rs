// Image generation: raw prompt-to-image calls and the compose-generate-record flow.
// All provider calls go through image_client.

pub mod generator;
pub mod handlers;
