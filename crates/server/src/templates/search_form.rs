use serde::Serialize;
use youbike::board::BoardQuery;

#[derive(Serialize)]
pub struct DistrictOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Serialize)]
pub struct SearchFormView {
    pub districts: Vec<DistrictOption>,
    pub search: String,
    pub sort_by: String,
    pub order: &'static str,
}

impl SearchFormView {
    pub fn new(districts: &[String], query: &BoardQuery) -> Self {
        let selected = query.district.trim();
        Self {
            districts: districts
                .iter()
                .map(|name| DistrictOption {
                    name: name.clone(),
                    selected: name == selected,
                })
                .collect(),
            search: query.search.trim().to_string(),
            sort_by: query.sort_by.clone(),
            order: query.order.as_str(),
        }
    }
}
