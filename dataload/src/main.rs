use anyhow::{Context, Result};
use dashboard::insights;
use dashboard::matches::MatchSchedule;
use dashboard::members::MemberDirectory;
use dashboard::recaps::RecapLibrary;
use dashboard::staff::TeamRoster;
use dashboard::tiers::TierCatalog;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Seeding dashboard stores");

    let members = MemberDirectory::seed(dataload::seed_members())
        .context("Failed to seed member directory")?;
    let team = TeamRoster::seed(dataload::seed_team()).context("Failed to seed team roster")?;
    let tiers = TierCatalog::seed(dataload::seed_tiers()).context("Failed to seed tier catalog")?;
    let schedule =
        MatchSchedule::seed(dataload::seed_matches()).context("Failed to seed match schedule")?;
    let recaps =
        RecapLibrary::seed(dataload::seed_recaps()).context("Failed to seed recap library")?;

    info!(
        "Seeded {} members, {} staff, {} tiers, {} matches, {} recaps",
        members.records().len(),
        team.records().len(),
        tiers.records().len(),
        schedule.records().len(),
        recaps.records().len(),
    );

    let stats = insights::platform_stats(members.records(), tiers.records());
    let summary = serde_json::json!({
        "platform": stats,
        "tier_distribution": insights::tier_distribution(tiers.records()),
        "region_breakdown": insights::region_breakdown(members.records()),
        "user_growth": dataload::user_growth(),
        "revenue_trend": dataload::revenue_trend(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
