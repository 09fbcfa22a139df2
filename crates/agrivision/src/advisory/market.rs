use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub market: String,
    pub crop: String,
    pub price_rs_per_kg: f64,
    pub distance_km: u32,
}

// market, crop, price per kg, distance
const PRICE_BOARD: [(&str, &str, f64, u32); 4] = [
    ("Alappuzha Mandi", "Paddy", 25.0, 10),
    ("Kottayam Market", "Paddy", 24.0, 30),
    ("Trivandrum Market", "Banana", 40.0, 15),
    ("Kollam Market", "Banana", 38.0, 25),
];

/// Markets trading the crop, best price first.
pub fn best_markets(crop: &str) -> Vec<MarketPrice> {
    let crop = crop.trim();
    let mut markets: Vec<MarketPrice> = PRICE_BOARD
        .iter()
        .filter(|(_, name, _, _)| name.eq_ignore_ascii_case(crop))
        .map(|&(market, name, price, distance)| MarketPrice {
            market: market.to_string(),
            crop: name.to_string(),
            price_rs_per_kg: price,
            distance_km: distance,
        })
        .collect();
    markets.sort_by(|left, right| right.price_rs_per_kg.total_cmp(&left.price_rs_per_kg));
    markets
}
