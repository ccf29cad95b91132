//! Lifecycle of the hosted form embedded in the modal.
//!
//! `FormEmbed` decides *when* the provider script is mounted and torn down;
//! a `FormHost` performs the actual DOM work. `DomFormHost` is the browser
//! implementation.

use log::debug;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlScriptElement};

use crate::config::EmbedConfig;

#[derive(Debug, Error, PartialEq)]
pub enum FormHostError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for FormHostError {
    fn from(value: JsValue) -> Self {
        FormHostError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// The DOM operations the embed needs.
pub trait FormHost {
    fn has_mount_point(&self) -> bool;
    fn clear_mount_point(&self) -> Result<(), FormHostError>;
    fn inject_script(&self, src: &str, owner_tag: &str) -> Result<(), FormHostError>;
    /// Removes every script in the document whose `src` contains `domain`.
    fn remove_provider_scripts(&self, domain: &str) -> Result<usize, FormHostError>;
}

pub struct DomFormHost {
    document: Document,
    mount: Option<Element>,
}

impl DomFormHost {
    /// Uses `mount` when given, otherwise looks the mount point up by id.
    pub fn new(mount: Option<Element>, mount_id: &str) -> Result<Self, FormHostError> {
        let document = web_sys::window()
            .ok_or(FormHostError::NoWindow)?
            .document()
            .ok_or(FormHostError::NoDocument)?;
        let mount = mount.or_else(|| document.get_element_by_id(mount_id));
        Ok(Self { document, mount })
    }
}

impl FormHost for DomFormHost {
    fn has_mount_point(&self) -> bool {
        self.mount.is_some()
    }

    fn clear_mount_point(&self) -> Result<(), FormHostError> {
        if let Some(mount) = &self.mount {
            mount.set_inner_html("");
        }
        Ok(())
    }

    fn inject_script(&self, src: &str, owner_tag: &str) -> Result<(), FormHostError> {
        let Some(mount) = &self.mount else {
            return Ok(());
        };

        let script = self
            .document
            .create_element("script")?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| FormHostError::Dom("created element is not a script".to_string()))?;
        script.set_type("text/javascript");
        script.set_src(src);
        script.set_async(true);
        script.set_attribute("data-embed-owner", owner_tag)?;

        mount.append_child(&script)?;
        Ok(())
    }

    fn remove_provider_scripts(&self, domain: &str) -> Result<usize, FormHostError> {
        let selector = format!("script[src*=\"{}\"]", domain);
        let nodes = self.document.query_selector_all(&selector)?;

        let mut removed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                element.remove();
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmbedPhase {
    Closed,
    Open,
}

/// Issued once per Closed -> Open transition. Only the latest ticket mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Injected,
    NoMountPoint,
    Stale,
}

pub struct FormEmbed {
    config: EmbedConfig,
    phase: EmbedPhase,
    generation: u64,
}

impl FormEmbed {
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            config,
            phase: EmbedPhase::Closed,
            generation: 0,
        }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    pub fn phase(&self) -> EmbedPhase {
        self.phase
    }

    /// Returns a ticket on Closed -> Open, `None` if already open.
    pub fn open(&mut self) -> Option<MountTicket> {
        match self.phase {
            EmbedPhase::Open => None,
            EmbedPhase::Closed => {
                self.phase = EmbedPhase::Open;
                self.generation += 1;
                Some(MountTicket(self.generation))
            }
        }
    }

    /// Clears the mount point and injects the provider script.
    pub fn mount(&self, ticket: MountTicket, host: &impl FormHost) -> Result<MountOutcome, FormHostError> {
        if self.phase != EmbedPhase::Open || ticket.0 != self.generation {
            return Ok(MountOutcome::Stale);
        }
        if !host.has_mount_point() {
            return Ok(MountOutcome::NoMountPoint);
        }

        host.clear_mount_point()?;
        let stray = host.remove_provider_scripts(&self.config.provider_domain)?;
        if stray > 0 {
            debug!("Removed {} stray provider script(s) before mounting", stray);
        }
        host.inject_script(&self.config.script_url, &self.config.owner_tag)?;
        Ok(MountOutcome::Injected)
    }

    /// Open -> Closed teardown. A close while already closed does nothing.
    pub fn close(&mut self, host: &impl FormHost) -> Result<usize, FormHostError> {
        if self.phase == EmbedPhase::Closed {
            return Ok(0);
        }
        self.phase = EmbedPhase::Closed;

        // Scripts go even if clearing the container failed.
        let cleared = host.clear_mount_point();
        let removed = host.remove_provider_scripts(&self.config.provider_domain)?;
        cleared?;
        Ok(removed)
    }

    /// Drops to `Closed` without touching the DOM, for when no host is reachable.
    pub fn reset(&mut self) {
        self.phase = EmbedPhase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ModalState, ModalVariant};
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeScript {
        src: String,
        owner: Option<String>,
        in_mount: bool,
    }

    struct FakeHost {
        has_mount: bool,
        mount_text: RefCell<String>,
        scripts: RefCell<Vec<FakeScript>>,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                has_mount: true,
                mount_text: RefCell::new(String::new()),
                scripts: RefCell::new(Vec::new()),
            }
        }

        fn without_mount() -> Self {
            Self { has_mount: false, ..Self::new() }
        }

        fn add_foreign_script(&self, src: &str) {
            self.scripts.borrow_mut().push(FakeScript {
                src: src.to_string(),
                owner: None,
                in_mount: false,
            });
        }

        fn provider_scripts(&self, domain: &str) -> usize {
            self.scripts.borrow().iter().filter(|s| s.src.contains(domain)).count()
        }

        fn mount_is_empty(&self) -> bool {
            self.mount_text.borrow().is_empty() && !self.scripts.borrow().iter().any(|s| s.in_mount)
        }
    }

    impl FormHost for FakeHost {
        fn has_mount_point(&self) -> bool {
            self.has_mount
        }

        fn clear_mount_point(&self) -> Result<(), FormHostError> {
            self.mount_text.borrow_mut().clear();
            self.scripts.borrow_mut().retain(|s| !s.in_mount);
            Ok(())
        }

        fn inject_script(&self, src: &str, owner_tag: &str) -> Result<(), FormHostError> {
            if !self.has_mount {
                return Ok(());
            }
            self.scripts.borrow_mut().push(FakeScript {
                src: src.to_string(),
                owner: Some(owner_tag.to_string()),
                in_mount: true,
            });
            // The provider renders its form next to the script.
            self.mount_text.borrow_mut().push_str("<form></form>");
            Ok(())
        }

        fn remove_provider_scripts(&self, domain: &str) -> Result<usize, FormHostError> {
            let mut scripts = self.scripts.borrow_mut();
            let before = scripts.len();
            scripts.retain(|s| !s.src.contains(domain));
            Ok(before - scripts.len())
        }
    }

    fn embed() -> FormEmbed {
        FormEmbed::new(EmbedConfig::default())
    }

    const DOMAIN: &str = crate::config::FORM_PROVIDER_DOMAIN;

    #[test]
    fn open_then_mount_injects_one_tagged_script() {
        let host = FakeHost::new();
        let mut embed = embed();

        let ticket = embed.open().expect("first open issues a ticket");
        assert_eq!(embed.mount(ticket, &host), Ok(MountOutcome::Injected));

        let scripts = host.scripts.borrow();
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].src, crate::config::FORM_SCRIPT_URL);
        assert_eq!(scripts[0].owner.as_deref(), Some(crate::config::FORM_OWNER_TAG));
        assert!(scripts[0].in_mount);
    }

    #[test]
    fn mount_clears_previous_container_content() {
        let host = FakeHost::new();
        host.mount_text.borrow_mut().push_str("leftover");
        let mut embed = embed();

        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        assert_eq!(*host.mount_text.borrow(), "<form></form>");
    }

    #[test]
    fn close_removes_every_provider_script_and_empties_mount() {
        let host = FakeHost::new();
        let mut embed = embed();

        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        // The provider script may pull in more scripts of its own.
        host.add_foreign_script("https://static.formstack.com/forms/js/3/jquery.js");
        host.add_foreign_script("https://cdn.example.com/analytics.js");

        // The mounted script leaves with the container; only the helper is counted.
        assert_eq!(embed.close(&host), Ok(1));
        assert_eq!(host.provider_scripts(DOMAIN), 0);
        assert!(host.mount_is_empty());
        assert_eq!(host.scripts.borrow().len(), 1);
        assert_eq!(embed.phase(), EmbedPhase::Closed);
    }

    #[test]
    fn close_without_open_is_a_no_op() {
        let host = FakeHost::new();
        host.add_foreign_script("https://rheicom.formstack.com/forms/js.php/other");
        let mut embed = embed();

        assert_eq!(embed.close(&host), Ok(0));
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }

    #[test]
    fn second_close_does_nothing() {
        let host = FakeHost::new();
        let mut embed = embed();
        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        host.add_foreign_script("https://static.formstack.com/forms/js/3/base.js");

        assert_eq!(embed.close(&host), Ok(1));
        host.add_foreign_script("https://static.formstack.com/forms/js/3/late.js");
        assert_eq!(embed.close(&host), Ok(0));
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }

    #[test]
    fn reopening_while_open_issues_no_ticket() {
        let host = FakeHost::new();
        let mut embed = embed();

        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        assert_eq!(embed.open(), None);
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }

    #[test]
    fn stale_ticket_does_not_mount() {
        let host = FakeHost::new();
        let mut embed = embed();

        let first = embed.open().unwrap();
        embed.close(&host).unwrap();
        assert_eq!(embed.mount(first, &host), Ok(MountOutcome::Stale));

        let second = embed.open().unwrap();
        assert_ne!(first, second);
        assert_eq!(embed.mount(first, &host), Ok(MountOutcome::Stale));
        assert_eq!(embed.mount(second, &host), Ok(MountOutcome::Injected));
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }

    #[test]
    fn missing_mount_point_skips_silently() {
        let host = FakeHost::without_mount();
        let mut embed = embed();

        let ticket = embed.open().unwrap();
        assert_eq!(embed.mount(ticket, &host), Ok(MountOutcome::NoMountPoint));
        assert_eq!(host.provider_scripts(DOMAIN), 0);
        assert_eq!(embed.phase(), EmbedPhase::Open);
    }

    #[test]
    fn mount_never_leaves_more_than_one_provider_script() {
        let host = FakeHost::new();
        host.add_foreign_script(crate::config::FORM_SCRIPT_URL);
        let mut embed = embed();

        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }

    #[test]
    fn reset_allows_a_fresh_open() {
        let mut embed = embed();
        embed.open().unwrap();
        embed.reset();
        assert_eq!(embed.phase(), EmbedPhase::Closed);
        assert!(embed.open().is_some());
    }

    #[test]
    fn get_started_then_close_scenario() {
        let host = FakeHost::new();
        let mut embed = embed();
        let mut modal = ModalState::default();

        modal = modal.opened(ModalVariant::GetStarted);
        assert_eq!(modal.variant.title(), "Get Started with DataStream");
        let ticket = embed.open().unwrap();
        embed.mount(ticket, &host).unwrap();
        assert_eq!(host.provider_scripts(DOMAIN), 1);

        modal = modal.closed();
        assert!(!modal.is_open);
        embed.close(&host).unwrap();
        assert_eq!(host.provider_scripts(DOMAIN), 0);
        assert!(host.mount_is_empty());
    }

    #[test]
    fn talk_to_us_clicked_twice_keeps_one_script() {
        let host = FakeHost::new();
        let mut embed = embed();
        let mut modal = ModalState::default();

        for _ in 0..2 {
            let was_open = modal.is_open;
            modal = modal.opened(ModalVariant::Contact);
            if !was_open {
                let ticket = embed.open().unwrap();
                embed.mount(ticket, &host).unwrap();
            } else {
                assert_eq!(embed.open(), None);
            }
            assert!(host.provider_scripts(DOMAIN) <= 1);
        }
        assert_eq!(modal.variant.title(), "Contact DataStream");
        assert_eq!(host.provider_scripts(DOMAIN), 1);
    }
}
