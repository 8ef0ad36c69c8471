use crate::infra::{media_from_path, parse_property_type, parse_role_type};
use chrono::{Duration, Local};
use clap::Args;
use listing_wizard::config::AppConfig;
use listing_wizard::error::AppError;
use listing_wizard::wizard::forms::{
    ApplicationFeeBasis, ChargesPayload, LeasingInfoPayload, MediaRef, PaymentFrequency,
    PropertyAddressPayload, RentFrequencyPayload,
};
use listing_wizard::wizard::gallery::{GallerySlots, PreviewRegistry};
use listing_wizard::wizard::{
    select_schema, DisplayColumn, FieldRegistry, FlowError, FormPayload, ItemCard, OnboardingFlow,
    PropertyType, RoleFormSubmission, RoleType, WizardController,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct FieldsArgs {
    /// Print the registry as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SchemaArgs {
    /// single-house, apartments or condominiums
    #[arg(long, value_parser = parse_property_type)]
    pub(crate) property_type: PropertyType,
    /// landlord, realtor or property-management
    #[arg(long, value_parser = parse_role_type)]
    pub(crate) role: Option<RoleType>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Local JPG/PNG to use as the gallery cover. A placeholder is used when omitted.
    #[arg(long)]
    pub(crate) cover: Option<PathBuf>,
    /// Stop before the gallery step to show the blocked "Next".
    #[arg(long)]
    pub(crate) skip_gallery: bool,
}

pub(crate) fn run_fields(args: FieldsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let registry = FieldRegistry::with_agreement_policy(config.wizard.agreement_policy);

    if args.json {
        match serde_json::to_string_pretty(registry.list()) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Field registry unavailable: {err}"),
        }
        return Ok(());
    }

    for (title, column) in [
        ("Left column", DisplayColumn::Left),
        ("Right column", DisplayColumn::Right),
        ("Below the grid", DisplayColumn::Footer),
    ] {
        println!("{title}");
        for definition in registry.column(column) {
            println!(
                "- {} {} [{}]",
                definition.label,
                definition.note.label(),
                definition.key
            );
        }
    }

    Ok(())
}

pub(crate) fn run_schema(args: SchemaArgs) -> Result<(), AppError> {
    let schema = select_schema(args.property_type, args.role);
    let role = args
        .role
        .map(|role| role.label())
        .unwrap_or("no role");

    println!("Onboarding schema for {} / {}", args.property_type.label(), role);
    for section in schema.sections() {
        println!("- {:?}: {}", section, schema.section_fields(*section).join(", "));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        cover,
        skip_gallery,
    } = args;
    let config = AppConfig::load()?;

    println!("Listing wizard demo");
    let mut flow = OnboardingFlow::new();
    if let Err(err) = onboard_condominium_landlord(&mut flow) {
        println!("  Onboarding stopped: {err}");
        return Ok(());
    }

    let registry = FieldRegistry::with_agreement_policy(config.wizard.agreement_policy);
    let mut controller = WizardController::new(registry)?;

    println!("\nInformation cards");
    render_cards(&controller.cards());

    for payload in demo_submissions() {
        let key = payload.field_key();
        match controller.submit(key, payload) {
            Ok(_) => println!("- saved {key}"),
            Err(err) => println!("  {key} rejected: {err}"),
        }
    }

    if let Err(missing) = controller.next() {
        println!("\nNext blocked: {missing}");
    }

    if skip_gallery {
        render_cards(&controller.cards());
        return Ok(());
    }

    let cover = match cover {
        Some(path) => media_from_path(&path)?,
        None => MediaRef::new("front-elevation.jpg", "image/jpeg", 820_000),
    };

    let previews = PreviewRegistry::new();
    let mut slots = GallerySlots::new(previews.clone());
    if let Err(issue) = slots.set_cover(cover) {
        println!("  Cover rejected: {}", issue.message);
    }
    let batch = slots.add_more(vec![
        MediaRef::new("living-room.png", "image/png", 610_000),
        MediaRef::new("kitchen.jpg", "image/jpeg", 540_000),
    ]);
    println!(
        "\nGallery: cover {} | {} extra photo(s) | {} live preview(s)",
        if slots.cover().is_some() { "set" } else { "missing" },
        batch.accepted.len(),
        previews.live_count()
    );

    let gallery = FormPayload::PropertyGallery(slots.to_payload());
    drop(slots);
    controller.submit(gallery.field_key(), gallery)?;
    println!("Previews still live after closing the uploader: {}", previews.live_count());

    match controller.next() {
        Ok(_) => println!("\nNext: all required fields complete"),
        Err(missing) => println!("\nNext blocked: {missing}"),
    }
    render_cards(&controller.cards());

    Ok(())
}

fn onboard_condominium_landlord(flow: &mut OnboardingFlow) -> Result<(), FlowError> {
    let stage = flow.select_property_type(PropertyType::Condominiums)?;
    println!("- onboarding -> {}", stage.label());
    let stage = flow.select_role(RoleType::Landlord)?;
    println!("- onboarding -> {}", stage.label());
    let stage = flow.submit_role_form(RoleFormSubmission {
        ownership_doc: Some(MediaRef::new("title-deed.pdf", "application/pdf", 240_000)),
        accept_terms: true,
        landlord_license_number: Some("IA-77120".to_string()),
        ..RoleFormSubmission::default()
    })?;
    println!("- onboarding -> {}", stage.label());
    Ok(())
}

fn render_cards(cards: &[ItemCard]) {
    for card in cards {
        let marker = if card.flagged { "!" } else { " " };
        println!(
            "{} [{}] {} {} ({:?})",
            marker,
            card.action_label(),
            card.label,
            card.note,
            card.column
        );
    }
}

fn demo_submissions() -> Vec<FormPayload> {
    let today = Local::now().date_naive();

    vec![
        FormPayload::PropertyAddress(PropertyAddressPayload {
            address: "88 Court Avenue".to_string(),
            city: "Des Moines".to_string(),
            postal_code: Some("50309".to_string()),
        }),
        FormPayload::LeasingInfo(LeasingInfoPayload {
            manager_name: "Avery Cole".to_string(),
            phone_number: "+12015550199".to_string(),
            email: "leasing@courtave.example".to_string(),
            same_as_property: true,
            street_address: "88 Court Avenue".to_string(),
            apt_suite_unit: None,
            city_town: "Des Moines".to_string(),
            state_territory: "IA".to_string(),
            zip_code: "50309".to_string(),
        }),
        FormPayload::Charges(ChargesPayload {
            application_fee: ApplicationFeeBasis::PerApplicant,
            admin_fee: 45,
        }),
        FormPayload::RentFrequency(RentFrequencyPayload {
            rent_payment_frequency: PaymentFrequency::Monthly,
            rent_reminder_date: today,
            rent_due_date: today + Duration::days(5),
        }),
    ]
}
