use innkeep_core::Room;

/// Filter criteria for listing rooms. Every clause is optional; present
/// clauses are combined conjunctively.
#[derive(Debug, Clone, Default)]
pub struct RoomQuery {
    /// Case-sensitive substring match against the room name.
    pub search: Option<String>,
    /// Exact match against the room's type reference.
    pub room_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl RoomQuery {
    /// Builds a query from raw request parameters.
    ///
    /// An empty parameter (`?minPrice=`) counts as absent and contributes no
    /// clause. Non-empty price bounds are parsed leniently: an unparseable
    /// bound becomes NaN, which makes every price comparison false, so the
    /// clause matches nothing rather than being rejected.
    pub fn from_params(
        search: Option<String>,
        room_type: Option<String>,
        min_price: Option<String>,
        max_price: Option<String>,
    ) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            room_type: room_type.filter(|s| !s.is_empty()),
            min_price: min_price
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.parse::<f64>().unwrap_or(f64::NAN)),
            max_price: max_price
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.parse::<f64>().unwrap_or(f64::NAN)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.room_type.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Whether the room satisfies every present clause.
    ///
    /// A room lacking the field a clause inspects never matches that clause.
    /// When a maximum bound is present the minimum defaults to zero, so
    /// `maxPrice` alone still excludes negative prices.
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(search) = &self.search {
            match &room.name {
                Some(name) if name.contains(search.as_str()) => {}
                _ => return false,
            }
        }

        if let Some(room_type) = &self.room_type {
            if room.room_type.as_deref() != Some(room_type.as_str()) {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let Some(price) = room.price else {
                return false;
            };
            let in_range = match self.max_price {
                Some(max) => price <= max && price >= self.min_price.unwrap_or(0.0),
                None => price >= self.min_price.unwrap_or(0.0),
            };
            if !in_range {
                return false;
            }
        }

        true
    }
}
