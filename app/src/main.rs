use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{IntroController, Scheduler, Section, VisibilityObserver};
use folio_types::{Content, FolioConfig};

mod components;
mod host;

use components::{
    CertificationsSection, ContactSection, Footer, HeroSection, IntroScreen, ProjectsSection,
    StorySection, TechStackSection,
};
use host::{BrowserObserver, BrowserScheduler};

const FOLIO_TOML: &str = include_str!("../folio.toml");

fn main() {
    if let Err(e) = dioxus_logger::init(tracing::Level::INFO) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    dioxus::launch(App);
}

/// Host capabilities, timings and page content shared by every section.
#[derive(Clone)]
pub struct Folio {
    pub scheduler: Rc<dyn Scheduler>,
    pub observer: Rc<dyn VisibilityObserver>,
    pub config: Rc<FolioConfig>,
    pub content: Rc<Content>,
}

impl Folio {
    fn new() -> Self {
        Self {
            scheduler: Rc::new(BrowserScheduler::new()),
            observer: Rc::new(BrowserObserver::new()),
            config: Rc::new(load_config()),
            content: Rc::new(Content::default()),
        }
    }

    /// Fresh jitter seed per mounted section.
    pub fn seed(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

pub fn use_folio() -> Folio {
    use_context::<Folio>()
}

fn load_config() -> FolioConfig {
    match FolioConfig::from_toml_str(FOLIO_TOML) {
        Ok(config) => {
            for warning in config.validate() {
                tracing::warn!("folio.toml: {}", warning);
            }
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid folio.toml, using defaults");
            FolioConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let folio = use_context_provider(Folio::new);
    let mut is_loading = use_signal(|| true);
    let mut show_intro = use_signal(|| true);

    let intro = use_hook(move || {
        let intro = IntroController::new(folio.scheduler.clone(), &folio.config.intro);
        intro.loading().on_change(move |v| is_loading.set(v));
        intro.intro().on_change(move |v| show_intro.set(v));
        Rc::new(RefCell::new(intro))
    });
    use_drop(move || intro.borrow_mut().unmount());

    if show_intro() {
        return rsx! {
            IntroScreen { loading: is_loading() }
        };
    }

    rsx! {
        div { class: "min-h-screen bg-background",
            main {
                section { id: "home", HeroSection {} }
                section { id: "story", StorySection {} }
                section { id: "projects", ProjectsSection {} }
                section { id: "tech-stack", TechStackSection {} }
                section { id: "certifications", CertificationsSection {} }
                section { id: "contact", ContactSection {} }
            }
            Footer {}
        }
    }
}
