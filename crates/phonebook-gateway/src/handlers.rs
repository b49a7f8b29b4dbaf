mod fallback;
mod info;
mod persons;

pub use fallback::unknown_endpoint;
pub use info::{info_handler, render_info};
pub use persons::{
    create_person_handler, delete_person_handler, get_person_handler, list_persons_handler,
    update_person_handler,
};
