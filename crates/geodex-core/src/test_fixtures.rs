use crate::model::building::Building;

// Build one fixture record; surface and floors are irrelevant to querying.
#[expect(clippy::too_many_arguments)]
pub(crate) fn building(
    id: &str,
    name: &str,
    city: &str,
    address: &str,
    usage: &str,
    dpe: &str,
    (lat, lng): (f64, f64),
    construction_year: i64,
) -> Building {
    Building {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        usage: usage.to_string(),
        dpe: dpe.to_string(),
        lat,
        lng,
        surface: 1_000.0,
        floors: 4,
        construction_year,
    }
}

/// Thirteen records spread over usages, grades, cities and years.
/// `b-13` carries a rating label outside the default scale.
#[rustfmt::skip]
pub(crate) fn fixture_records() -> Vec<Building> {
    vec![
        building("b-01", "Tour Horizon", "Courbevoie", "52 Quai de Dion-Bouton", "office", "C", (48.8965, 2.2447), 2006),
        building("b-02", "Résidence Victor Hugo", "Paris", "12 Avenue Victor Hugo", "residential", "B", (48.8698, 2.2862), 1972),
        building("b-03", "Hôtel de Ville Annex", "Paris", "3 Rue de Lobau", "public", "E", (48.8566, 2.3522), 1890),
        building("b-04", "Les Terrasses", "Lyon", "8 Quai Saint-Vincent", "residential", "A", (45.7676, 4.8344), 2015),
        building("b-05", "Atelier Nord", "Lille", "44 Rue Nationale", "industrial", "G", (50.6292, 3.0573), 1958),
        building("b-06", "Pavillon Sud", "Marseille", "17 Boulevard Longchamp", "residential", "D", (43.3026, 5.3950), 1931),
        building("b-07", "Campus Sciences", "Paris", "4 Place Jussieu", "education", "C", (48.8462, 2.3566), 1971),
        building("b-08", "Galerie Marchande", "Nantes", "2 Place Royale", "retail", "F", (47.2133, -1.5586), 1985),
        building("b-09", "Entrepôt Seine", "Gennevilliers", "Port de Gennevilliers", "industrial", "E", (48.9331, 2.2967), 1972),
        building("b-10", "Maison Verte", "Bordeaux", "9 Cours de l'Intendance", "residential", "A", (44.8412, -0.5736), 2021),
        building("b-11", "Tour Paris Nord", "Saint-Denis", "1 Avenue de Paris", "office", "D", (48.9362, 2.3574), 1972),
        building("b-12", "Clinique du Parc", "Paris", "25 Rue du Parc", "health", "B", (48.8350, 2.2900), 1999),
        building("b-13", "Annexe Inconnue", "Paris", "7 Rue Sans Nom", "office", "N/C", (48.8600, 2.3400), 1965),
    ]
}

/// Borrow every record, as the filter stage would hand them on.
pub(crate) fn refs(records: &[Building]) -> Vec<&Building> {
    records.iter().collect()
}

/// Collect record ids in order.
pub(crate) fn ids(rows: &[&Building]) -> Vec<String> {
    rows.iter().map(|b| b.id.clone()).collect()
}
