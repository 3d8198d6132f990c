use lat_long::haversine;

fn main() {
    // A tenth of a degree along the meridian, at the equator and at the pole.
    println!("{}", haversine(0.0, 0.0, 0.1, 0.0));
    println!("{}", haversine(89.9, 0.0, 90.0, 0.0));
}
