//! Small hooks shared by pages.

use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

/// Cancellation token tied to the calling component's lifetime.
///
/// Every timer loop a page spawns selects on this token (or a child of it);
/// the token is cancelled when the component unmounts.
pub fn use_view_token() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.cancel());
    token
}
