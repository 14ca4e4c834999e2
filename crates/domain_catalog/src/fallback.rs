//! Built-in room catalog
//!
//! Served whenever the backend's resort listing fails or comes back empty,
//! so the site can always show and quote the six rooms of the two properties.

use rust_decimal_macros::dec;

use core_kernel::{Money, Rate};
use domain_booking::{BookingError, RoomPricingPolicy};

use crate::listing::RoomListing;

pub const VALPARAI: &str = "Valparai-Solaiyur";
pub const KOTHAGIRI: &str = "Kothagiri";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in listings, in catalog order
pub fn fallback_rooms() -> Result<Vec<RoomListing>, BookingError> {
    let valparai_gst = Rate::from_percentage(dec!(18));
    let kothagiri_gst = Rate::from_percentage(dec!(5));

    let mut family = RoomListing::new(
        "1",
        "Deluxe Family Room",
        VALPARAI,
        RoomPricingPolicy::builder(Money::inr(2603))
            .max_adults_per_room(2)
            .max_rooms_per_booking(3)
            .extra_adult_charge(Money::inr(800))
            .extra_child_charge(Money::inr(500))
            .max_children_per_room(2)
            .tax_rate(valparai_gst)
            .build()?,
    );
    family.description =
        "Our Deluxe Family Room offers spacious and comfortable accommodations perfect for families."
            .into();
    family.amenities = strings(&[
        "Double Bed", "Max 5 adults", "Fan", "Bathroom", "Bed Linen", "Dining table",
        "Mineral Water", "Bath or Shower", "Flat-screen TV", "Mountain View", "Spa",
        "Infinity Pool", "WiFi", "Restaurant", "Gym",
    ]);
    family.images = strings(&["/r1.jpg", "/r2.jpg", "/r3.jpg", "/r4.jpg"]);
    family.rating = 4.9;
    family.reviews = 128;
    family.room_type = "Family Room".into();
    family.bed_type = "Double Bed".into();
    family.tags = strings(&["Luxury", "Family Friendly", "Pet Friendly", "Spa", "Wellness"]);
    family.season = Some("Best: Oct-Mar".into());
    family.special = Some("Free Breakfast Included".into());
    family.original_price = Some(Money::inr(3254));

    let mut family_balcony = RoomListing::new(
        "2",
        "Deluxe Family Room (With Balcony)",
        VALPARAI,
        RoomPricingPolicy::builder(Money::inr(2982))
            .max_adults_per_room(2)
            .max_rooms_per_booking(2)
            .extra_adult_charge(Money::inr(900))
            .extra_child_charge(Money::inr(600))
            .max_children_per_room(2)
            .tax_rate(valparai_gst)
            .build()?,
    );
    family_balcony.description =
        "Our Deluxe Family Room with Balcony offers a spacious and comfortable retreat for families."
            .into();
    family_balcony.amenities = strings(&[
        "Double Bed", "Max 5 adults", "Bathroom", "Open Balcony", "Forest View", "Campfire",
        "Trekking", "Bird Watching", "Eco-friendly",
    ]);
    family_balcony.images = strings(&["/2r.jpg", "/r1.jpg", "/3r.jpg", "/4r.jpg"]);
    family_balcony.rating = 4.7;
    family_balcony.reviews = 95;
    family_balcony.room_type = "Family Room".into();
    family_balcony.bed_type = "Double Bed".into();
    family_balcony.tags = strings(&["Eco-Friendly", "Adventure", "Romantic", "Wildlife", "Nature"]);
    family_balcony.season = Some("Year Round".into());
    family_balcony.special = Some("Nature Walk Included".into());
    family_balcony.original_price = Some(Money::inr(3728));

    let mut balcony = RoomListing::new(
        "3",
        "Deluxe Balcony Rooms",
        KOTHAGIRI,
        RoomPricingPolicy::builder(Money::inr(2499))
            .max_adults_per_room(3)
            .max_rooms_per_booking(4)
            .tax_rate(kothagiri_gst)
            .build()?,
    );
    balcony.description =
        "Our Deluxe Balcony Rooms offer a spacious and comfortable retreat with beautiful balcony views."
            .into();
    balcony.amenities = strings(&[
        "King Bed", "Max 3 adults", "Geyser", "Open Balcony", "Housekeeping",
        "Wardrobe or closet", "Valley View", "Private Pool", "Butler Service", "Fine Dining", "Spa",
    ]);
    balcony.images = strings(&["/kot-del2.png", "/kot-del22.png", "/kot-del11.png", "/kot-del4.jpg"]);
    balcony.rating = 4.8;
    balcony.reviews = 112;
    balcony.room_type = "Deluxe Room".into();
    balcony.bed_type = "King Bed".into();
    balcony.tags = strings(&["Luxury", "Premium", "Romantic", "Mountain View", "Balcony"]);
    balcony.season = Some("Best: Nov-Feb".into());
    balcony.special = Some("Early Bird Discount".into());
    balcony.original_price = Some(Money::inr(4499));

    let mut non_balcony = RoomListing::new(
        "4",
        "Deluxe Non-Balcony Rooms",
        KOTHAGIRI,
        RoomPricingPolicy::builder(Money::inr(2199))
            .max_adults_per_room(3)
            .max_rooms_per_booking(4)
            .tax_rate(kothagiri_gst)
            .build()?,
    );
    non_balcony.description =
        "Comfortable Deluxe Rooms without balcony, perfect for budget-conscious travelers.".into();
    non_balcony.amenities = strings(&[
        "King Bed", "Max 3 adults", "Geyser", "Housekeeping", "Attached Bathroom",
        "Wardrobe or closet", "Valley View", "Private Pool", "Butler Service", "Fine Dining", "Spa",
    ]);
    non_balcony.images = strings(&["/kot-del2.png", "/kot-del22.png"]);
    non_balcony.rating = 4.8;
    non_balcony.reviews = 112;
    non_balcony.room_type = "Deluxe Room".into();
    non_balcony.bed_type = "King Bed".into();
    non_balcony.tags = strings(&["Budget", "Family", "Comfort", "Value"]);
    non_balcony.season = Some("Best: Nov-Feb".into());
    non_balcony.special = Some("Weekend Special".into());
    non_balcony.original_price = Some(Money::inr(3999));

    let house_policy = RoomPricingPolicy::builder(Money::inr(6300))
        .max_adults_per_room(7)
        .max_rooms_per_booking(1)
        .tax_rate(kothagiri_gst)
        .build()?;

    let mut house = RoomListing::new("5", "One Bedroom House", KOTHAGIRI, house_policy.clone());
    house.description = "Spacious one bedroom house perfect for large families or groups.".into();
    house.amenities = strings(&[
        "King Bed", "Max 7 adults", "Geyser", "Housekeeping", "Attached Bathroom",
        "Wardrobe or closet", "Valley View", "Private Pool", "Butler Service", "Fine Dining", "Spa",
    ]);
    house.images = strings(&["/kot-1bhk.jpg", "/kot-1bhk.2jpg.jpg", "/kot-11bhk.jpg"]);
    house.rating = 4.8;
    house.reviews = 112;
    house.room_type = "House".into();
    house.bed_type = "King Bed".into();
    house.tags = strings(&["Luxury", "Family", "Premium", "Spacious", "Private"]);
    house.season = Some("Best: Dec-Mar".into());
    house.special = Some("Luxury Package".into());
    house.original_price = Some(Money::inr(10500));

    let mut house_balcony = RoomListing::new(
        "6",
        "One Bedroom House (With Balcony)",
        KOTHAGIRI,
        house_policy,
    );
    house_balcony.description =
        "Beautiful one bedroom house with balcony offering stunning views.".into();
    house_balcony.amenities = strings(&[
        "King Bed", "Max 7 adults", "Geyser", "Open Balcony", "Attached Bathroom",
        "Wardrobe or closet", "Valley View", "Private Pool", "Butler Service", "Fine Dining", "Spa",
    ]);
    house_balcony.images = strings(&["/apart.jpg", "/kot-bhk3.jpg", "/apart1.jpg"]);
    house_balcony.rating = 4.8;
    house_balcony.reviews = 112;
    house_balcony.room_type = "House".into();
    house_balcony.bed_type = "King Bed".into();
    house_balcony.tags = strings(&["Premium", "Luxury", "Family", "View", "Balcony"]);
    house_balcony.season = Some("Best: Dec-Mar".into());
    house_balcony.special = Some("Premium View".into());
    house_balcony.original_price = Some(Money::inr(10500));

    Ok(vec![
        family,
        family_balcony,
        balcony,
        non_balcony,
        house,
        house_balcony,
    ])
}
