//! Search modal over the configured post list.
//!
//! The modal markup lives in the page; this module toggles it and mounts a
//! Leptos view into `#search-results` that re-renders whenever the query
//! changes.

use blogkit_core::{HighlightSegment, PostMatch, SearchIndex, SearchOutcome, keys::ModalKey};
use leptos::{either::Either, mount::mount_to, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::{dom, error::Result, page::Page};

const HIDDEN_CLASS: &str = "hidden";

/// Handles on the modal elements plus the query signal feeding the results.
#[derive(Clone)]
struct SearchModal {
    modal: web_sys::Element,
    input: Option<HtmlInputElement>,
    body: Option<HtmlElement>,
    query: ArcRwSignal<String>,
}

impl SearchModal {
    fn is_open(&self) -> bool {
        !self.modal.class_list().contains(HIDDEN_CLASS)
    }

    fn open(&self) {
        let _ = self.modal.class_list().remove_1(HIDDEN_CLASS);
        if let Some(input) = &self.input {
            let _ = input.focus();
        }
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn close(&self) {
        let _ = self.modal.class_list().add_1(HIDDEN_CLASS);
        if let Some(input) = &self.input {
            input.set_value("");
        }
        self.query.set(String::new());
        if let Some(body) = &self.body {
            let _ = body.style().remove_property("overflow");
        }
    }
}

/// Bind the search modal.
pub fn init(page: &Page) -> Result<()> {
    let (Some(modal), Some(toggle)) = (page.by_id("search-modal"), page.by_id("search-toggle"))
    else {
        return Ok(());
    };
    let backdrop = modal.query_selector(".search-modal__backdrop")?;

    let search = &page.config.search;
    let index = SearchIndex::for_page(
        search.posts.clone(),
        &page.pathname()?,
        &search.posts_path_marker,
        &search.posts_url_prefix,
    );

    let modal = SearchModal {
        modal,
        input: page.by_id_as::<HtmlInputElement>("search-input"),
        body: page.document.body(),
        query: ArcRwSignal::new(String::new()),
    };

    if let Some(results) = page.by_id_as::<HtmlElement>("search-results") {
        results.set_inner_html("");
        let query = modal.query.clone();
        let hint = search.hint.clone();
        mount_to(results, move || {
            let query = Signal::derive(move || query.get());
            view! { <ResultPane index=index query=query hint=hint /> }
        })
        .forget();
    }

    {
        let modal = modal.clone();
        dom::listen(&toggle, "click", move |_| modal.open())?;
    }

    if let Some(backdrop) = backdrop {
        let modal = modal.clone();
        dom::listen(&backdrop, "click", move |_| modal.close())?;
    }

    {
        let modal = modal.clone();
        dom::listen(&page.document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            match ModalKey::from_event(&event.key(), event.ctrl_key(), event.meta_key()) {
                ModalKey::Open => {
                    event.prevent_default();
                    modal.open();
                }
                ModalKey::Close if modal.is_open() => modal.close(),
                _ => {}
            }
        })?;
    }

    if let Some(input) = modal.input.clone() {
        let query = modal.query.clone();
        let source = input.clone();
        dom::listen(&input, "input", move |_| query.set(source.value()))?;
    }

    Ok(())
}

/// Hint, empty state or the list of matching posts.
#[component]
fn ResultPane(
    /// Posts to search.
    index: SearchIndex,
    /// Raw query text.
    query: Signal<String>,
    /// Text shown while the query is empty.
    hint: String,
) -> impl IntoView {
    let outcome = Memo::new(move |_| index.search(&query.get()));

    move || match outcome.get() {
        SearchOutcome::Hint => {
            view! { <p class="search-modal__hint">{hint.clone()}</p> }.into_any()
        }
        SearchOutcome::NoResults { query: normalized } => view! {
            <div class="search-no-results">"No results found for \"" {normalized} "\""</div>
        }
        .into_any(),
        SearchOutcome::Matches(matches) => matches
            .into_iter()
            .map(|item| view! { <ResultCard item=item /> })
            .collect_view()
            .into_any(),
    }
}

/// A single matching post.
#[component]
fn ResultCard(item: PostMatch) -> impl IntoView {
    let PostMatch {
        url,
        title,
        excerpt,
        tags,
    } = item;

    view! {
      <a href=url class="search-result">
        <div class="search-result__title">{highlighted(title)}</div>
        <div class="search-result__excerpt">{highlighted(excerpt)}</div>
        <div class="search-result__tags">
          {tags
            .into_iter()
            .map(|tag| view! { <span class="search-result__tag">{tag}</span> })
            .collect_view()}
        </div>
      </a>
    }
}

fn highlighted(segments: Vec<HighlightSegment>) -> impl IntoView {
    segments
        .into_iter()
        .map(|segment| {
            if segment.marked {
                Either::Left(view! { <mark class="search-highlight">{segment.text}</mark> })
            } else {
                Either::Right(segment.text)
            }
        })
        .collect_view()
}
