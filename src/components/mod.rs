pub mod amenity_filter;
pub mod bottom_nav;
pub mod cafe_card;
pub mod cafe_detail;
pub mod cafe_form;
pub mod cafe_list;
pub mod cafe_map;
pub mod favorite_button;
pub mod review_form;
pub mod reviews_list;
pub mod search_bar;
pub mod toast;
