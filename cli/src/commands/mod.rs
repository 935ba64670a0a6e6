mod calc;
mod helpers;
mod history;
mod ingredient;
mod theme;

pub(crate) use calc::cmd_calc;
pub(crate) use history::{cmd_history_calcs, cmd_history_changes};
pub(crate) use ingredient::{
    cmd_ingredient_add, cmd_ingredient_list, cmd_ingredient_remove, cmd_ingredient_rename,
    cmd_ingredient_save,
};
pub(crate) use theme::cmd_theme;
