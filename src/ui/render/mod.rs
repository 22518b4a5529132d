mod all;
mod detail;
mod footer;
mod log;
mod menus;
mod pagination;
mod table;
mod toolbar;

use self::log::log;
use super::*;
use detail::detail;
use footer::footer;
use menus::{category_menu, sort_menu};
use pagination::pagination;
use table::table;
use toolbar::toolbar;

pub use all::all as render;
