// Localize session demo - drives the headless shell through a short visit:
// browse, search, check in, redeem, and review the activity log. Runs with
// the simulated latency on, so the pauses are the same ones a UI would see.

use std::sync::Arc;

use localize::api::LocalizeApi;
use localize::fixtures::seed_catalog;
use localize::store::FixtureStore;
use localize::views::{AppShell, Tab};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let store = Arc::new(FixtureStore::new(seed_catalog()));
    let mut shell = AppShell::new(LocalizeApi::new(store));

    shell.activate().await;
    let summary = shell.user_summary().expect("demo user is seeded");
    println!(
        "👋 {} | {} points | {} ({}% toward {})",
        summary.name,
        summary.points,
        summary.progress.current,
        summary.progress.percent.round(),
        summary
            .progress
            .next
            .map(|r| r.to_string())
            .unwrap_or_else(|| "the top".to_string()),
    );

    // Explore: what's on this week?
    println!("\n🔎 Exploring \"coffee\"...");
    shell.explore.set_query("coffee");
    for event in shell.explore.filtered_events() {
        println!("  🎉 {} (+{} points) @ {}", event.title, event.points_reward, event.location);
    }
    for business in shell.explore.filtered_businesses() {
        println!("  🏪 {} — {}", business.name, business.address);
    }

    // Engage: drill into the roastery and check in.
    shell.switch_tab(Tab::Engage).await;
    shell.engage.set_query("roastery");
    let Some(roastery) = shell.engage.filtered_businesses().first().map(|b| b.id) else {
        println!("No businesses matched; ending the demo early.");
        return;
    };
    shell.engage.select(roastery);
    let business = shell.engage.selected_business().expect("just selected");
    println!(
        "\n🏪 {} ({:.1}★, {} reviews) — {} products listed",
        business.name,
        business.rating,
        business.review_count,
        business.products.len()
    );
    let notice = shell.engage.check_in(roastery).await;
    println!("  {}", notice.message());

    // Featured: spend some of the balance.
    shell.switch_tab(Tab::Featured).await;
    println!("\n✨ Balance: {} points", shell.featured.user_points());
    let redeemable = shell
        .featured
        .discounts()
        .iter()
        .find(|d| shell.featured.can_redeem(d))
        .map(|d| (d.id, d.title.clone()));
    if let Some((id, title)) = redeemable {
        println!("  Redeeming \"{}\"...", title);
        let notice = shell.featured.redeem(id).await;
        println!("  {}", notice.message());
        println!("  New balance: {} points", shell.featured.user_points());
    }

    // Profile: the session shows up in the activity log.
    shell.open_profile();
    println!("\n📒 Recent activity:");
    for interaction in shell.recent_activity().await.iter().take(4) {
        let delta = if interaction.points_spent > 0 {
            format!("-{} pts", interaction.points_spent)
        } else {
            format!("+{} pts", interaction.points_earned)
        };
        println!("  {:?} {}", interaction.kind, delta);
    }
    shell.close_profile();
}
