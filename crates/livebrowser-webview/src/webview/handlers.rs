use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, PanelEvent};

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Arc<Mutex<Vec<PanelEvent>>>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(?state, url = %url, "page load");
        if let Ok(mut evts) = events.lock() {
            evts.push(PanelEvent::PageLoad { state, url });
        }
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Arc<Mutex<Vec<PanelEvent>>>,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(title = %title, "title changed");
        if let Ok(mut evts) = events.lock() {
            evts.push(PanelEvent::TitleChanged { title });
        }
    })
}
