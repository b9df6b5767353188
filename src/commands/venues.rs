use rozpis_core::Venue;

use crate::render::Render;

pub fn run() {
    for venue in Venue::ALL {
        println!("{}", venue.render());
    }
}
