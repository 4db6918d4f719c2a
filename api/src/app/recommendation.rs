//! Cuisine-diverse recommendation sampling
//!
//! Selects restaurants by first drawing cuisine groups, then drawing one
//! member per drawn group. Weighting is by number of draws per cuisine,
//! not by group size, which biases the result toward variety rather than
//! volume.

use rand::Rng;

use crate::domain::entities::Restaurant;

/// Select up to `limit` restaurants spread across distinct cuisine groups.
///
/// Restaurants without a cuisine form their own group. The output never
/// contains the same restaurant twice and its length is
/// `min(limit, restaurants.len())`; an empty input or a zero `limit`
/// yields an empty output.
///
/// The caller supplies the randomness source so selection can be made
/// deterministic in tests.
pub fn sample_diverse<R: Rng + ?Sized>(
    restaurants: Vec<Restaurant>,
    limit: usize,
    rng: &mut R,
) -> Vec<Restaurant> {
    if limit == 0 || restaurants.is_empty() {
        return Vec::new();
    }

    // Group by cuisine, preserving first-seen order of groups and members.
    let mut groups: Vec<(Option<String>, Vec<Restaurant>)> = Vec::new();
    for restaurant in restaurants {
        match groups
            .iter_mut()
            .find(|(cuisine, _)| *cuisine == restaurant.cuisine)
        {
            Some((_, members)) => members.push(restaurant),
            None => {
                let cuisine = restaurant.cuisine.clone();
                groups.push((cuisine, vec![restaurant]));
            }
        }
    }

    let mut draws = draw_cuisines(&groups, limit, rng);
    let mut picks: Vec<Restaurant> = Vec::with_capacity(limit);

    while picks.len() < limit && !groups.is_empty() {
        let mut progressed = false;
        for cuisine in &draws {
            if picks.len() == limit {
                break;
            }
            let Some(index) = groups.iter().position(|(key, _)| key == cuisine) else {
                continue;
            };
            if groups[index].1.is_empty() {
                groups.remove(index);
                continue;
            }
            let members = &mut groups[index].1;
            let chosen = rng.gen_range(0..members.len());
            picks.push(members.remove(chosen));
            progressed = true;
        }
        if !progressed {
            // Every drawn cuisine ran dry; redraw from the groups that still
            // hold members so the output reaches the requested size.
            groups.retain(|(_, members)| !members.is_empty());
            if groups.is_empty() {
                break;
            }
            draws = draw_cuisines(&groups, limit - picks.len(), rng);
        }
    }

    picks
}

/// Draw `count` group keys uniformly with replacement
fn draw_cuisines<R: Rng + ?Sized>(
    groups: &[(Option<String>, Vec<Restaurant>)],
    count: usize,
    rng: &mut R,
) -> Vec<Option<String>> {
    (0..count)
        .map(|_| groups[rng.gen_range(0..groups.len())].0.clone())
        .collect()
}
