pub mod clock;
pub mod config;
pub mod content;
pub mod scroll;
pub mod state;

pub mod components {
    pub mod course_card;
    pub mod cta_link;
    pub mod icon;
    pub mod section_title;
}

pub mod sections {
    pub mod bio;
    pub mod contact;
    pub mod courses;
    pub mod footer;
    pub mod hero;
    pub mod methodology;
    pub mod navbar;
    pub mod stats;
    pub mod testimonials;
}

pub mod pages {
    pub mod landing;
}

pub use pages::landing::App;

#[cfg(test)]
mod test_support;
