//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use blogkit_core::Theme;
use blogkit_web::{Page, cards, counter, links, mobile_toc, progress, search, theme, toast, toc};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn page_with(html: &str) -> Page {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);
    Page::load().unwrap()
}

fn clear_storage(key: &str) {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_toc_links_and_ids() {
    let page = page_with(
        r#"<nav class="toc"><ul id="toc-list"></ul></nav>
           <article><h2>Getting Started</h2><p>x</p><h3 id="custom">Details</h3></article>"#,
    );
    toc::init(&page).unwrap();

    let links = page.query_all("#toc-list a").unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].get_attribute("href").as_deref(), Some("#getting-started"));
    assert_eq!(links[0].class_name(), "toc-h2");
    assert_eq!(links[1].get_attribute("href").as_deref(), Some("#custom"));
    assert_eq!(links[1].class_name(), "toc-h3");
    assert!(page.by_id("getting-started").is_some());

    links[0].dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(page.window.location().hash().unwrap(), "#getting-started");
    page.window.location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
fn test_toc_hidden_without_headings() {
    let page = page_with(
        r#"<div class="toc-card" id="card"><ul id="toc-list"></ul></div>
           <article><p>no headings</p></article>"#,
    );
    toc::init(&page).unwrap();

    let card = page.by_id_as::<HtmlElement>("card").unwrap();
    assert_eq!(card.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
fn test_theme_toggle_persists() {
    clear_storage("blog-theme");
    let page = page_with(r#"<button id="theme-toggle"></button>"#);
    page.root().unwrap().set_attribute("data-theme", "light").unwrap();

    assert_eq!(theme::toggle(&page).unwrap(), Theme::Dark);
    assert_eq!(page.root().unwrap().get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(page.storage_get("blog-theme").as_deref(), Some("dark"));

    assert_eq!(theme::toggle(&page).unwrap(), Theme::Light);
    assert_eq!(page.storage_get("blog-theme").as_deref(), Some("light"));
    clear_storage("blog-theme");
}

#[wasm_bindgen_test]
fn test_theme_init_uses_saved_preference() {
    let page = page_with("");
    page.storage_set("blog-theme", "dark").unwrap();
    page.root().unwrap().set_attribute("data-theme", "light").unwrap();

    theme::init(&page).unwrap();
    assert_eq!(page.root().unwrap().get_attribute("data-theme").as_deref(), Some("dark"));
    clear_storage("blog-theme");
}

#[wasm_bindgen_test]
fn test_theme_init_stores_resolved_theme() {
    clear_storage("blog-theme");
    let page = page_with("");
    page.root().unwrap().set_attribute("data-theme", "dark").unwrap();

    theme::init(&page).unwrap();
    assert_eq!(page.root().unwrap().get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(page.storage_get("blog-theme").as_deref(), Some("dark"));
    clear_storage("blog-theme");
}

#[wasm_bindgen_test]
fn test_toc_visibility_window() {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let page = page_with(
        r#"<nav class="toc" id="wrapper"><ul id="toc-list"></ul></nav>
           <article>
             <h2>Intro</h2>
             <div style="height: 4000px"></div>
             <h2 id="overview">Overview</h2>
             <p>body</p>
             <h2 id="conclusion">Conclusion</h2>
             <div style="height: 4000px"></div>
           </article>"#,
    );
    toc::init(&page).unwrap();

    let wrapper = page.by_id("wrapper").unwrap();
    assert!(wrapper.class_list().contains("toc-hidden"));

    let overview = page.by_id_as::<HtmlElement>("overview").unwrap();
    window.scroll_to_with_x_and_y(0.0, f64::from(overview.offset_top()));
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert!(!wrapper.class_list().contains("toc-hidden"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn test_reading_progress_sets_width_on_scroll() {
    let page = page_with(
        r#"<div id="reading-progress"></div>
           <article><p style="height: 2000px">long read</p></article>"#,
    );
    progress::init(&page).unwrap();

    let bar = page.by_id_as::<HtmlElement>("reading-progress").unwrap();
    assert_eq!(bar.style().get_property_value("width").unwrap(), "");

    page.window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    let width = bar.style().get_property_value("width").unwrap();
    assert!(width.ends_with('%'), "unexpected width {width:?}");
}

#[wasm_bindgen_test]
async fn test_toast_shows_then_hides() {
    let page = page_with(
        r#"<script type="application/json" id="blogkit-config">
             { "share": { "toast_duration_ms": 30 } }
           </script>"#,
    );
    assert_eq!(page.config.share.toast_duration_ms, 30);

    toast::show(&page, "Link copied to clipboard!").unwrap();
    toast::show(&page, "Link copied to clipboard!").unwrap();
    assert_eq!(page.query_all("#toast").unwrap().len(), 1);

    let element = page.by_id("toast").unwrap();
    assert_eq!(element.get_attribute("role").as_deref(), Some("alert"));
    assert_eq!(element.get_attribute("aria-live").as_deref(), Some("polite"));
    assert_eq!(element.text_content().as_deref(), Some("Link copied to clipboard!"));
    assert!(element.class_list().contains("show"));

    TimeoutFuture::new(100).await;
    assert!(!element.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn test_post_card_clicks() {
    let window = web_sys::window().unwrap();
    window.location().set_hash("").unwrap();
    let page = page_with(
        r##"<div class="post-card">
             <h2 class="post-card__title"><a href="#card-post">Post</a></h2>
             <span class="tag-chip" id="chip">Rust</span>
             <a id="author">Author</a>
             <p id="excerpt">Excerpt</p>
           </div>"##,
    );
    cards::init(&page).unwrap();

    let click = |id: &str| page.by_id_as::<HtmlElement>(id).unwrap().click();
    let hash = || window.location().hash().unwrap();

    click("chip");
    assert_eq!(hash(), "");
    click("author");
    assert_eq!(hash(), "");

    click("excerpt");
    assert_eq!(hash(), "#card-post");
    window.location().set_hash("").unwrap();
}

#[wasm_bindgen_test]
async fn test_remote_counter_keeps_placeholder_on_failure() {
    let page = page_with(
        r#"<script type="application/json" id="blogkit-config">
             { "counter": { "api_base": "http://127.0.0.1:9/hit" } }
           </script>
           <span class="js-visitor-count" id="hits">--</span>"#,
    );
    counter::init_remote(&page).unwrap();
    TimeoutFuture::new(200).await;

    let hits = page.by_id("hits").unwrap();
    assert_eq!(hits.text_content().as_deref(), Some("--"));
}

#[wasm_bindgen_test]
fn test_enhance_runs_page_behaviours() {
    let document = web_sys::window().unwrap().document().unwrap();
    assert_ne!(document.ready_state(), "loading");
    document.body().unwrap().set_inner_html(
        r#"<nav class="toc"><ul id="toc-list"></ul></nav>
           <article><h2>First</h2><img id="pic" src="a.png"></article>"#,
    );

    blogkit_web::enhance();

    assert_eq!(document.query_selector_all("#toc-list a").unwrap().length(), 1);
    let pic = document.get_element_by_id("pic").unwrap();
    assert_eq!(pic.get_attribute("loading").as_deref(), Some("lazy"));
    clear_storage("blog-theme");
}

#[wasm_bindgen_test]
fn test_local_visitor_counter_increments() {
    let page = page_with(r#"<span id="visitor-count">--</span>"#);
    let key = format!("visitor-count-{}", page.pathname().unwrap());
    clear_storage(&key);

    counter::init_local(&page).unwrap();
    counter::init_local(&page).unwrap();

    let element = page.by_id("visitor-count").unwrap();
    assert_eq!(element.text_content().as_deref(), Some("2"));
    assert_eq!(page.storage_get(&key).as_deref(), Some("2"));
    clear_storage(&key);
}

#[wasm_bindgen_test]
fn test_article_links_and_images() {
    let page = page_with(
        r#"<article>
             <img id="plain" src="a.png"><img id="eager" src="b.png" loading="eager">
             <a id="ext" href="https://github.com/rust-lang">gh</a>
             <a id="rel" href="/posts/x.html">x</a>
           </article>"#,
    );
    links::init_lazy_images(&page).unwrap();
    links::init_external(&page).unwrap();

    let plain = page.by_id("plain").unwrap();
    let eager = page.by_id("eager").unwrap();
    assert_eq!(plain.get_attribute("loading").as_deref(), Some("lazy"));
    assert_eq!(eager.get_attribute("loading").as_deref(), Some("eager"));

    let ext = page.by_id("ext").unwrap();
    assert_eq!(ext.get_attribute("target").as_deref(), Some("_blank"));
    assert_eq!(ext.get_attribute("rel").as_deref(), Some("noopener noreferrer"));
    assert!(page.by_id("rel").unwrap().get_attribute("target").is_none());
}

#[wasm_bindgen_test]
fn test_mobile_toc_toggle() {
    let page = page_with(
        r#"<button id="toc-toggle" aria-expanded="false"></button>
           <div id="toc-content" hidden></div>"#,
    );
    mobile_toc::init(&page).unwrap();

    let toggle = page.by_id_as::<HtmlElement>("toc-toggle").unwrap();
    let content = page.by_id_as::<HtmlElement>("toc-content").unwrap();

    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(!content.hidden());

    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(content.hidden());
}

#[wasm_bindgen_test]
async fn test_search_modal_flow() {
    let page = page_with(
        r#"<button id="search-toggle"></button>
           <div id="search-modal" class="hidden">
             <div class="search-modal__backdrop"></div>
             <input id="search-input">
             <div id="search-results"><p>static hint</p></div>
           </div>"#,
    );
    search::init(&page).unwrap();

    let modal = page.by_id("search-modal").unwrap();
    let results = page.by_id("search-results").unwrap();
    assert!(results.inner_html().contains("search-modal__hint"));

    let init = KeyboardEventInit::new();
    init.set_key("k");
    init.set_ctrl_key(true);
    let shortcut = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    page.document.dispatch_event(&shortcut).unwrap();
    assert!(!modal.class_list().contains("hidden"));

    let input = page.by_id_as::<HtmlInputElement>("search-input").unwrap();
    input.set_value("uac");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    TimeoutFuture::new(20).await;

    let html = results.inner_html();
    assert!(html.contains("search-result"));
    assert!(html.contains(r#"<mark class="search-highlight">UAC</mark>"#));
    assert!(!html.contains("Privilege Escalation via Weak"));

    input.set_value("kerberos");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    TimeoutFuture::new(20).await;
    assert!(results.inner_html().contains("No results found for"));

    let backdrop = modal
        .query_selector(".search-modal__backdrop")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    backdrop.click();
    TimeoutFuture::new(20).await;

    assert!(modal.class_list().contains("hidden"));
    assert_eq!(input.value(), "");
    assert!(results.inner_html().contains("search-modal__hint"));
}
