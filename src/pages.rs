//! About, Projects and Contact pages, built into `#page-root` on mount and
//! torn down on drop.

use crate::constants::*;
use crate::core::constants::{CONTACT_STATUS_CLEAR_MS, PROJECT_BOX_SLOTS};
use crate::core::contact::{ContactError, ContactForm, EmailRelayConfig, Field, SubmitStatus};
use crate::core::content::{ABOUT_PARAGRAPHS, CONTACT_BLURB, CONTACT_METHODS};
use crate::core::projects::{self, ProjectBox};
use crate::core::Route;
use crate::{contact, dom, navigate, App, HistoryMode};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

enum PageState {
    Static,
    Projects(Rc<RefCell<ProjectBox>>),
    Contact(Rc<ContactState>),
}

pub struct ContentPage {
    route: Route,
    document: web::Document,
    _listeners: Vec<EventListener>,
    _state: PageState,
}

impl ContentPage {
    pub fn mount(
        document: &web::Document,
        route: Route,
        app: Weak<RefCell<App>>,
    ) -> anyhow::Result<Self> {
        let root: web::Element = dom::element_by_id(document, PAGE_ROOT_ID)?;
        let html = match route {
            Route::About => about_html(),
            Route::Projects => projects_html(),
            Route::Contact => contact_html(),
            Route::Home => anyhow::bail!("home is not a content page"),
        };
        root.set_inner_html(&html);
        dom::set_visible(document, PAGE_ROOT_ID, true);

        let state = match route {
            Route::Projects => PageState::Projects(Rc::new(RefCell::new(ProjectBox::default()))),
            Route::Contact => PageState::Contact(Rc::new(ContactState {
                document: document.clone(),
                form: RefCell::new(ContactForm::default()),
                relay: EmailRelayConfig::default(),
                clear_timer: RefCell::new(None),
            })),
            _ => PageState::Static,
        };

        let mut listeners = vec![wire_page_clicks(document, &root, &state, app)];
        if let PageState::Contact(contact) = &state {
            listeners.extend(wire_contact_form(document, contact));
            render_contact(contact);
        }
        log::info!("[router] mounted {}", route.path());
        Ok(Self {
            route,
            document: document.clone(),
            _listeners: listeners,
            _state: state,
        })
    }

    pub fn route(&self) -> Route {
        self.route
    }
}

impl Drop for ContentPage {
    fn drop(&mut self) {
        if let Some(root) = self.document.get_element_by_id(PAGE_ROOT_ID) {
            root.set_inner_html("");
        }
        dom::set_visible(&self.document, PAGE_ROOT_ID, false);
        log::debug!("[router] unmounted {}", self.route.path());
    }
}

/// One delegated click listener per page: exit, in-page links, project slots
/// and popup actions.
fn wire_page_clicks(
    document: &web::Document,
    root: &web::Element,
    state: &PageState,
    app: Weak<RefCell<App>>,
) -> EventListener {
    let doc = document.clone();
    let projects = match state {
        PageState::Projects(b) => Some(b.clone()),
        _ => None,
    };
    EventListener::new(root, "click", move |ev| {
        let target = ev.target();
        if let Some((_, id)) = dom::closest_with_attr(target.clone(), "id") {
            if id == PAGE_EXIT_ID {
                if let Some(history) = web::window().and_then(|w| w.history().ok()) {
                    _ = history.back();
                }
                return;
            }
        }
        if let Some((_, path)) = dom::closest_with_attr(target.clone(), PAGE_LINK_ATTR) {
            navigate(&app, Route::from_path(&path), HistoryMode::Push);
            return;
        }
        let Some(projects) = &projects else {
            return;
        };
        if let Some((_, action)) = dom::closest_with_attr(target.clone(), PAGE_ACTION_ATTR) {
            let mut b = projects.borrow_mut();
            match action.as_str() {
                "close" => b.close(),
                "next" => b.next_image(),
                "prev" => b.prev_image(),
                "skills" => b.open_skills(),
                "skills-close" => b.close_skills(),
                _ => return,
            }
            render_project_popup(&doc, &b);
            return;
        }
        if let Some((_, slot)) = dom::closest_with_attr(target, PROJECT_SLOT_ATTR) {
            let mut b = projects.borrow_mut();
            if slot.parse::<usize>().map(|i| b.open(i)).unwrap_or(false) {
                render_project_popup(&doc, &b);
            }
        }
    })
}

fn exit_button() -> String {
    format!("<button id='{}' class='page-exit'>EXIT</button>", PAGE_EXIT_ID)
}

fn about_html() -> String {
    let mut html = String::from("<section class='page about'><h1>ABOUT ME</h1>");
    for p in ABOUT_PARAGRAPHS {
        html.push_str(&format!("<p>{}</p>", p));
    }
    html.push_str(&format!(
        "<div class='page-links'><button {a}='{p}'>PROJECTS</button><button {a}='{c}'>CONTACT</button></div>",
        a = PAGE_LINK_ATTR,
        p = Route::Projects.path(),
        c = Route::Contact.path(),
    ));
    html.push_str(&exit_button());
    html.push_str("</section>");
    html
}

fn projects_html() -> String {
    let mut html = String::from("<section class='page projects'><h1>PC BOX</h1><div class='box-grid'>");
    for slot in 0..PROJECT_BOX_SLOTS {
        match projects::slot(slot) {
            Some(p) => html.push_str(&format!(
                "<button class='box-slot filled' {}='{}' title='{}'><img src='{}' alt='{}'></button>",
                PROJECT_SLOT_ATTR,
                slot,
                p.name,
                p.images.first().copied().unwrap_or(""),
                p.name
            )),
            None => html.push_str("<div class='box-slot empty'></div>"),
        }
    }
    html.push_str(&format!(
        "</div><div id='{}' class='hidden'></div>{}</section>",
        PROJECT_POPUP_ID,
        exit_button()
    ));
    html
}

fn render_project_popup(document: &web::Document, b: &ProjectBox) {
    let Some(popup) = document.get_element_by_id(PROJECT_POPUP_ID) else {
        return;
    };
    let Some(p) = b.selected() else {
        popup.set_inner_html("");
        dom::set_visible(document, PROJECT_POPUP_ID, false);
        return;
    };
    let act = PAGE_ACTION_ATTR;
    let mut html = format!(
        "<div class='popup'><button {act}='close' class='popup-close'>×</button>\
         <h2>{}</h2><div class='popup-image'>\
         <button {act}='prev'>‹</button><img src='{}' alt='{}'><button {act}='next'>›</button></div>\
         <p>{}</p><ul class='popup-meta'><li>Category: {}</li><li>Time: {}</li><li>Status: {}</li></ul>\
         <a href='{}' target='_blank' rel='noopener'>View project</a>\
         <button {act}='skills'>SKILLS</button>",
        p.name,
        b.current_image().unwrap_or(""),
        p.name,
        p.description,
        p.category,
        p.time_frame,
        p.status,
        p.link,
    );
    if b.skills_open() {
        html.push_str(&format!(
            "<div class='skills-modal'><button {act}='skills-close'>×</button><ul>"
        ));
        for s in p.skills {
            html.push_str(&format!("<li>{}</li>", s));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</div>");
    popup.set_inner_html(&html);
    dom::set_visible(document, PROJECT_POPUP_ID, true);
}

fn contact_html() -> String {
    let mut methods = String::new();
    for m in CONTACT_METHODS {
        methods.push_str(&format!(
            "<li><span class='icon'>{}</span><span class='kind'>{}</span><span class='value'>{}</span></li>",
            m.icon, m.kind, m.value
        ));
    }
    format!(
        "<section class='page contact'><h1>CONTACT</h1><p>{blurb}</p><ul class='contact-methods'>{methods}</ul>\
         <form id='{form}' novalidate>\
         <input id='{name}' name='name' type='text' placeholder='Name'>\
         <input id='{email}' name='email' type='email' placeholder='Email'>\
         <textarea id='{message}' name='message' placeholder='Message'></textarea>\
         <button id='{submit}' type='submit'>SEND MESSAGE</button>\
         <p id='{status}' class='contact-status'></p></form>{exit}</section>",
        blurb = CONTACT_BLURB,
        methods = methods,
        form = CONTACT_FORM_ID,
        name = CONTACT_NAME_ID,
        email = CONTACT_EMAIL_ID,
        message = CONTACT_MESSAGE_ID,
        submit = CONTACT_SUBMIT_ID,
        status = CONTACT_STATUS_ID,
        exit = exit_button(),
    )
}

struct ContactState {
    document: web::Document,
    form: RefCell<ContactForm>,
    relay: EmailRelayConfig,
    clear_timer: RefCell<Option<Timeout>>,
}

fn wire_contact_form(document: &web::Document, state: &Rc<ContactState>) -> Vec<EventListener> {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] missing #{}", CONTACT_FORM_ID);
        return Vec::new();
    };

    let st = state.clone();
    let on_input = EventListener::new(&form, "input", move |ev| {
        let Some(target) = ev.target() else {
            return;
        };
        let (name, value) = if let Some(i) = target.dyn_ref::<web::HtmlInputElement>() {
            (i.name(), i.value())
        } else if let Some(t) = target.dyn_ref::<web::HtmlTextAreaElement>() {
            (t.name(), t.value())
        } else {
            return;
        };
        if let Some(field) = Field::from_name(&name) {
            st.form.borrow_mut().set_field(field, value);
        }
    });

    let st = Rc::downgrade(state);
    let on_submit = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            ev.prevent_default();
            if let Some(state) = st.upgrade() {
                submit(&state);
            }
        },
    );
    vec![on_input, on_submit]
}

fn submit(state: &Rc<ContactState>) {
    let begun = state.form.borrow_mut().begin_submit();
    let payload = match begun {
        Ok(p) => p,
        Err(ContactError::AlreadySubmitting) => return,
        Err(e) => {
            log::info!("[contact] rejected: {}", e);
            render_contact(state);
            schedule_status_clear(state);
            return;
        }
    };
    render_contact(state);

    let relay = state.relay.clone();
    let weak = Rc::downgrade(state);
    spawn_local(async move {
        let result = contact::send(&relay, &payload).await;
        // the page may have been left while the request was in flight
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.form.borrow_mut().finish_submit(result);
        render_contact(&state);
        schedule_status_clear(&state);
    });
}

/// Replacing the timer cancels any earlier one.
fn schedule_status_clear(state: &Rc<ContactState>) {
    let weak = Rc::downgrade(state);
    let timeout = Timeout::new(CONTACT_STATUS_CLEAR_MS, move || {
        if let Some(state) = weak.upgrade() {
            state.form.borrow_mut().clear_status();
            render_contact(&state);
        }
    });
    *state.clear_timer.borrow_mut() = Some(timeout);
}

fn render_contact(state: &ContactState) {
    let doc = &state.document;
    let form = state.form.borrow();
    let payload = form.payload();
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(doc, CONTACT_NAME_ID) {
        el.set_value(&payload.name);
    }
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(doc, CONTACT_EMAIL_ID) {
        el.set_value(&payload.email);
    }
    if let Ok(el) = dom::element_by_id::<web::HtmlTextAreaElement>(doc, CONTACT_MESSAGE_ID) {
        el.set_value(&payload.message);
    }
    if let Ok(button) = dom::element_by_id::<web::HtmlButtonElement>(doc, CONTACT_SUBMIT_ID) {
        button.set_disabled(form.is_submitting());
        button.set_text_content(Some(form.button_label()));
    }
    let (text, class) = match form.status() {
        Some(SubmitStatus::Sent) => (SubmitStatus::Sent.message(), "contact-status success"),
        Some(status) => (status.message(), "contact-status error"),
        None => (String::new(), "contact-status"),
    };
    if let Some(el) = doc.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(Some(&text));
        _ = el.set_attribute("class", class);
    }
}
