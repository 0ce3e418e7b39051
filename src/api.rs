use crate::constants::{EXPERIENCES_PATH, PROJECTS_PATH};
use crate::shared::Shared;
use anyhow::{anyhow, bail};
use folio_core::{ExperienceRecord, ProjectRecord};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;

async fn fetch_list<T: DeserializeOwned>(url: &str) -> anyhow::Result<Vec<T>> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow!("request failed: {e}"))?;
    if !resp.ok() {
        bail!("HTTP {} {}", resp.status(), resp.status_text());
    }
    let text = resp.text().await.map_err(|e| anyhow!("reading body: {e}"))?;
    Ok(serde_json::from_str(&text)?)
}

/// Failures degrade to an empty collection so the popup still opens.
async fn fetch_or_empty<T: DeserializeOwned>(base: &str, path: &str) -> Vec<T> {
    let url = format!("{}{}", base.trim_end_matches('/'), path);
    match fetch_list(&url).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("[api] {url}: {e:#}");
            Vec::new()
        }
    }
}

#[derive(Default)]
struct Pending {
    projects: Option<Vec<ProjectRecord>>,
    experiences: Option<Vec<ExperienceRecord>>,
}

fn settle(owner: &Weak<Shared>, pending: &RefCell<Pending>) {
    let ready = {
        let p = pending.borrow();
        p.projects.is_some() && p.experiences.is_some()
    };
    if !ready {
        return;
    }
    let Some(shared) = owner.upgrade() else {
        return;
    };
    let mut p = pending.borrow_mut();
    let projects = p.projects.take().unwrap_or_default();
    let experiences = p.experiences.take().unwrap_or_default();
    drop(p);
    shared
        .scene
        .borrow_mut()
        .content_mut()
        .finish_loading(projects, experiences);
    shared.sync_popup();
}

/// Fetch projects and experiences concurrently, once, at mount.
pub fn load_content(shared: &Rc<Shared>, base_url: String) {
    shared.scene.borrow_mut().content_mut().begin_loading();
    let pending = Rc::new(RefCell::new(Pending::default()));

    let owner = Rc::downgrade(shared);
    let p = pending.clone();
    let base = base_url.clone();
    spawn_local(async move {
        let items = fetch_or_empty::<ProjectRecord>(&base, PROJECTS_PATH).await;
        p.borrow_mut().projects = Some(items);
        settle(&owner, &p);
    });

    let owner = Rc::downgrade(shared);
    spawn_local(async move {
        let items = fetch_or_empty::<ExperienceRecord>(&base_url, EXPERIENCES_PATH).await;
        pending.borrow_mut().experiences = Some(items);
        settle(&owner, &pending);
    });
}
