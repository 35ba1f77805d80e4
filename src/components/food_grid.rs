use leptos::prelude::*;
use reels_core::Food;

/// Static grid of reel thumbnails with their counters
#[component]
pub fn FoodGrid(foods: Vec<Food>) -> impl IntoView {
    view! {
        <div class="food-grid">
            {foods
                .into_iter()
                .map(|food| {
                    view! {
                        <div class="food-tile">
                            <video class="food-tile-video" src=food.video_url.clone() muted=true preload="metadata"></video>
                            <div class="food-tile-info">
                                <p class="food-tile-name">{food.display_name().to_string()}</p>
                                <span class="food-tile-stat">"♥ " {food.likes}</span>
                                <span class="food-tile-stat">"★ " {food.saves}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
