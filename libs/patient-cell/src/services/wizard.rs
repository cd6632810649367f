use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use scheduling_cell::models::{BookingRecord, ReservationOutcome};
use scheduling_cell::services::availability::SlotService;
use scheduling_cell::services::booking::BookingService;
use shared_models::professional::{ClinicService, Professional};
use shared_store::ProfessionalStore;

use crate::models::{BookingOutcome, BookingSummary, WizardError, WizardStep};

/// Linear three-step booking flow: pick professional and service, pick
/// date and time from a fresh slot query, confirm. Navigation is gated
/// per step; `back` is always allowed.
pub struct BookingWizard {
    step: WizardStep,
    professionals: Vec<Professional>,
    services: Vec<ClinicService>,
    selected_professional: Option<Uuid>,
    selected_service: Option<Uuid>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<NaiveTime>,
    offered_slots: Vec<NaiveTime>,
}

impl BookingWizard {
    pub fn new(professionals: Vec<Professional>, services: Vec<ClinicService>) -> Self {
        Self {
            step: WizardStep::SelectProvider,
            professionals,
            services,
            selected_professional: None,
            selected_service: None,
            selected_date: None,
            selected_time: None,
            offered_slots: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    pub fn services(&self) -> &[ClinicService] {
        &self.services
    }

    pub fn offered_slots(&self) -> &[NaiveTime] {
        &self.offered_slots
    }

    pub fn selected_professional(&self) -> Option<Uuid> {
        self.selected_professional
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<NaiveTime> {
        self.selected_time
    }

    pub fn select_professional(&mut self, professional_id: Uuid) -> Result<(), WizardError> {
        if !self
            .professionals
            .iter()
            .any(|professional| professional.id == professional_id)
        {
            return Err(WizardError::UnknownProfessional);
        }

        self.selected_professional = Some(professional_id);
        // Slots belong to the previous professional, start over.
        self.selected_date = None;
        self.selected_time = None;
        self.offered_slots.clear();
        Ok(())
    }

    pub fn select_service(&mut self, service_id: Uuid) -> Result<(), WizardError> {
        if !self.services.iter().any(|service| service.id == service_id) {
            return Err(WizardError::UnknownService);
        }

        self.selected_service = Some(service_id);
        Ok(())
    }

    /// Changing the date invalidates the time pick and the offered
    /// slots until the caller refreshes them.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.selected_time = None;
        self.offered_slots.clear();
    }

    pub fn set_offered_slots(&mut self, slots: Vec<NaiveTime>) {
        self.offered_slots = slots;
    }

    pub fn select_time(&mut self, time: NaiveTime) -> Result<(), WizardError> {
        if !self.offered_slots.contains(&time) {
            return Err(WizardError::TimeNotOffered);
        }

        self.selected_time = Some(time);
        Ok(())
    }

    /// Advance to the next step; rejected when the current step's
    /// selection is incomplete.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::SelectProvider => {
                if self.selected_professional.is_none() || self.selected_service.is_none() {
                    return Err(WizardError::ProviderSelectionIncomplete);
                }
                self.step = WizardStep::SelectSlot;
            }
            WizardStep::SelectSlot => {
                if self.selected_date.is_none() || self.selected_time.is_none() {
                    return Err(WizardError::SlotSelectionIncomplete);
                }
                self.step = WizardStep::Confirm;
            }
            WizardStep::Confirm => {}
        }

        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::SelectProvider | WizardStep::SelectSlot => WizardStep::SelectProvider,
            WizardStep::Confirm => WizardStep::SelectSlot,
        };
        self.step
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        let professional = self
            .professionals
            .iter()
            .find(|professional| Some(professional.id) == self.selected_professional)?;
        let service = self
            .services
            .iter()
            .find(|service| Some(service.id) == self.selected_service)?;

        Some(BookingSummary {
            professional_name: professional.name.clone(),
            service_name: service.name.clone(),
            price: service.price,
            date: self.selected_date?,
            time: self.selected_time?,
        })
    }

    /// After a conflict the user has to pick again from fresh slots.
    fn return_to_slot_selection(&mut self) {
        self.step = WizardStep::SelectSlot;
        self.selected_time = None;
        self.offered_slots.clear();
    }
}

/// Bridges the wizard to the scheduling services.
pub struct PatientBookingService {
    store: ProfessionalStore,
    slot_service: SlotService,
    booking_service: BookingService,
}

impl PatientBookingService {
    pub fn new(store: ProfessionalStore) -> Self {
        Self {
            slot_service: SlotService::new(store.clone()),
            booking_service: BookingService::new(store.clone()),
            store,
        }
    }

    /// Load the roster and service catalog and open the wizard on its
    /// first step.
    pub async fn start(&self) -> BookingWizard {
        let (professionals, services) = tokio::join!(
            self.store.list_professionals(),
            self.store.list_services()
        );
        BookingWizard::new(professionals, services)
    }

    /// Re-query free slots for the wizard's current professional+date.
    pub async fn refresh_slots(&self, wizard: &mut BookingWizard) -> Result<(), WizardError> {
        let professional_id = wizard
            .selected_professional()
            .ok_or(WizardError::ProviderSelectionIncomplete)?;
        let date = wizard
            .selected_date()
            .ok_or(WizardError::SlotSelectionIncomplete)?;

        let slots = self.slot_service.available_slots(professional_id, date).await;
        debug!("Wizard offered {} slot(s) for {}", slots.len(), date);
        wizard.set_offered_slots(slots);
        Ok(())
    }

    /// Final step: reserve the selected slot for the patient.
    pub async fn confirm(
        &self,
        wizard: &mut BookingWizard,
        patient: &str,
    ) -> Result<BookingOutcome, WizardError> {
        if wizard.step() != WizardStep::Confirm {
            return Err(WizardError::NotOnConfirmStep);
        }
        if patient.trim().is_empty() {
            return Err(WizardError::PatientRequired);
        }

        let professional_id = wizard
            .selected_professional()
            .ok_or(WizardError::ProviderSelectionIncomplete)?;
        let date = wizard
            .selected_date()
            .ok_or(WizardError::SlotSelectionIncomplete)?;
        let time = wizard
            .selected_time()
            .ok_or(WizardError::SlotSelectionIncomplete)?;

        match self
            .booking_service
            .reserve(professional_id, date, time, patient.trim())
            .await
        {
            ReservationOutcome::Booked => Ok(BookingOutcome::Confirmed(BookingRecord {
                professional_id,
                date,
                time,
                patient: patient.trim().to_string(),
            })),
            ReservationOutcome::SlotTaken => {
                wizard.return_to_slot_selection();
                Ok(BookingOutcome::SlotTaken)
            }
            ReservationOutcome::UnknownProfessional => Err(WizardError::UnknownProfessional),
        }
    }
}
