//! Toast notification.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::{error::Result, page::Page};

const TOAST_ID: &str = "toast";
const SHOW_CLASS: &str = "show";

/// Show `message` in the page toast, creating it on first use.
pub fn show(page: &Page, message: &str) -> Result<()> {
    let toast = match page.by_id(TOAST_ID) {
        Some(toast) => toast,
        None => create(page)?,
    };

    toast.set_text_content(Some(message));
    toast.class_list().add_1(SHOW_CLASS)?;

    Timeout::new(page.config.share.toast_duration_ms, move || {
        let _ = toast.class_list().remove_1(SHOW_CLASS);
    })
    .forget();

    Ok(())
}

fn create(page: &Page) -> Result<Element> {
    let toast = page.document.create_element("div")?;
    toast.set_id(TOAST_ID);
    toast.set_class_name("toast");
    toast.set_attribute("role", "alert")?;
    toast.set_attribute("aria-live", "polite")?;
    page.body()?.append_child(&toast)?;
    Ok(toast)
}
