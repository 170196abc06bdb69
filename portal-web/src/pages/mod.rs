//! Views mounted by the router.
//!
//! Each view module exposes a `render` entry point; [`VIEW_MODULES`] is the
//! bundle registry that [`crate::views::StaticViewSource`] loads from.

use crate::views::{ViewId, ViewModule};

pub mod dashboard;
pub mod home;
pub mod login;

pub const VIEW_MODULES: &[ViewModule] = &[
    ViewModule {
        id: ViewId::Home,
        render: home::render,
    },
    ViewModule {
        id: ViewId::Login,
        render: login::render,
    },
    ViewModule {
        id: ViewId::Dashboard,
        render: dashboard::render,
    },
];
