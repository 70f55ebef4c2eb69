//! Prompt Composer: turns a user's selections into the text sent to the image model.
//!
//! Everything here is pure and synchronous. `build_prompt` assembles the full
//! description and clamps it to the image API's ceiling; `build_initial_prompt`
//! produces the shorter, band-targeted explanation used before options are picked.

pub mod assembler;
pub mod fitting;
pub mod handlers;
pub mod initial;
pub mod preview;
pub mod prompts;
pub mod selection;

use tracing::info;

pub use assembler::assemble_description;
pub use fitting::{clamp_prompt, ClampContext, PromptLimits};
pub use initial::{build_initial_prompt, InitialBand};
pub use preview::{build_prompt_preview, translate_to_korean};
pub use selection::{Audience, AudienceKind, PartialSelection, Selection};

/// Assembles and clamps the final prompt for `selection`.
pub fn build_prompt(selection: &Selection, limits: &PromptLimits) -> String {
    let description = assemble_description(selection);
    let ctx = ClampContext {
        style_block: selection.style.instruction(),
        topic_detail: selection.detail(),
    };
    let prompt = clamp_prompt(&description, &ctx, limits);

    info!(
        "Final prompt length: {} chars (limit: {})",
        fitting::char_len(&prompt),
        limits.max_chars
    );
    prompt
}
