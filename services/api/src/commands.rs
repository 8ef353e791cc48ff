use chesterfield::config::{AppConfig, SiteConfig};
use chesterfield::error::AppError;
use chesterfield::leads::{LeadNotification, LeadSubmission};
use chesterfield::site::savings::{
    self, SavingsEstimate, SavingsQuery, DEFAULT_DOORS, DEFAULT_MONTHLY_RENT,
};
use chesterfield::site::sitemap;
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct SavingsArgs {
    /// Monthly rent per unit
    #[arg(long, default_value_t = DEFAULT_MONTHLY_RENT)]
    pub(crate) rent: f64,
    /// Number of doors (units) under management
    #[arg(long, default_value_t = DEFAULT_DOORS)]
    pub(crate) doors: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SitemapArgs {
    /// Public base URL (defaults to SITE_URL)
    #[arg(long)]
    pub(crate) base_url: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct LeadPreviewArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[arg(long)]
    pub(crate) phone: Option<String>,
    #[arg(long)]
    pub(crate) city: Option<String>,
    #[arg(long)]
    pub(crate) units: Option<String>,
    #[arg(long)]
    pub(crate) address: Option<String>,
    #[arg(long)]
    pub(crate) notes: Option<String>,
    #[arg(long)]
    pub(crate) source: Option<String>,
    /// Recipient override, as the form's `toEmail` field
    #[arg(long)]
    pub(crate) to_email: Option<String>,
}

impl From<LeadPreviewArgs> for LeadSubmission {
    fn from(args: LeadPreviewArgs) -> Self {
        LeadSubmission {
            email: Some(args.email),
            name: args.name,
            phone: args.phone,
            city: args.city,
            units: args.units,
            address: args.address,
            notes: args.notes,
            source: args.source,
            to_email: args.to_email,
        }
    }
}

pub(crate) fn run_savings(args: SavingsArgs) -> Result<(), AppError> {
    let estimate = savings::estimate(SavingsQuery {
        rent: args.rent,
        doors: args.doors,
    })?;
    println!("{}", render_savings(&estimate));
    Ok(())
}

fn render_savings(estimate: &SavingsEstimate) -> String {
    format!(
        "Savings estimate\n\
         Monthly rent: ${:.2} x {} door(s)\n\
         Typical leasing fee: {:.0}% of one month's rent per unit\n\
         Est. savings on leasing fees: ${:.2}\n\
         Our management fee: {:.0}% of collected rent, no leasing fee",
        estimate.monthly_rent,
        estimate.doors,
        estimate.leasing_fee_rate * 100.0,
        estimate.estimated_savings,
        estimate.management_fee_rate * 100.0,
    )
}

pub(crate) fn run_sitemap(args: SitemapArgs) -> Result<(), AppError> {
    let site = sitemap_site(args.base_url)?;
    let entries = sitemap::entries(&site.base_url, Utc::now());
    print!("{}", sitemap::render_xml(&entries));
    Ok(())
}

/// `--base-url` gets the same validation as `SITE_URL`.
fn sitemap_site(base_url: Option<String>) -> Result<SiteConfig, AppError> {
    match base_url {
        Some(url) => Ok(SiteConfig::parse(url)?),
        None => Ok(AppConfig::load()?.site),
    }
}

pub(crate) fn run_lead_preview(args: LeadPreviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let submission = LeadSubmission::from(args);
    let recipient = submission.recipient(config.leads.default_recipient.as_deref());
    let notification = LeadNotification::compose(&submission, recipient);

    println!("To: {}", notification.recipient);
    println!("From: {}", config.leads.sender);
    println!("Subject: {}", notification.subject);
    println!(
        "Delivery: {}",
        if config.leads.provider_configured() {
            "resend"
        } else {
            "log only (RESEND_API_KEY not set)"
        }
    );
    println!();
    println!("{}", notification.html);
    Ok(())
}
