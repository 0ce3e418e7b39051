use crate::constants::{POPUP_VISIBLE_CLASS, STYLE_DISPLAY_HIDDEN, STYLE_DISPLAY_SHOWN};
use crate::markup;
use folio_core::{PopupContent, PopupView};
use web_sys as web;

/// The popup element plus the last state written to it, so the DOM is only
/// touched when the view or bound content actually changes.
pub struct PopupDom {
    element: web::HtmlElement,
    last_view: Option<PopupView>,
    last_content: Option<PopupContent>,
}

impl PopupDom {
    pub fn new(element: web::HtmlElement) -> Self {
        let dom = Self {
            element,
            last_view: None,
            last_content: None,
        };
        dom.hide();
        dom
    }

    pub fn sync(&mut self, view: PopupView, content: Option<PopupContent>) {
        if self.last_content != content {
            match &content {
                Some(c) => self.element.set_inner_html(&markup::render_popup(c)),
                None => self.element.set_inner_html(""),
            }
            self.last_content = content;
        }
        if self.last_view.as_ref() == Some(&view) {
            return;
        }
        let style = self.element.style();
        let shown = view.mounted && self.last_content.is_some();
        _ = style.set_property(
            "display",
            if shown {
                STYLE_DISPLAY_SHOWN
            } else {
                STYLE_DISPLAY_HIDDEN
            },
        );
        if let Some(pos) = view.position {
            _ = style.set_property("left", &format!("{:.0}px", pos.left));
            _ = style.set_property("top", &format!("{:.0}px", pos.top));
        }
        let classes = self.element.class_list();
        if view.visible {
            _ = classes.add_1(POPUP_VISIBLE_CLASS);
        } else {
            _ = classes.remove_1(POPUP_VISIBLE_CLASS);
        }
        self.last_view = Some(view);
    }

    pub fn hide(&self) {
        _ = self.element.class_list().remove_1(POPUP_VISIBLE_CLASS);
        _ = self.element.style().set_property("display", STYLE_DISPLAY_HIDDEN);
    }
}
