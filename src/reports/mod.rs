mod export;
mod tables;

pub use self::export::export_plans;
pub use self::tables::{
    heroes as print_hero_table, marches as print_marches, options as print_options_table,
    plan as print_plan, talents as print_talent_table,
};
