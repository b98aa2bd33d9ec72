//! Card showing one doctor in the directory grid.

use leptos::prelude::*;

use crate::state::directory::DoctorRecord;

#[component]
pub fn DoctorCard(doctor: DoctorRecord) -> impl IntoView {
    let DoctorRecord { name, department, qualification, address, photo_url } = doctor;
    view! {
        <div class="doctor-card">
            <div class="doctor-header">
                <img src=photo_url alt=name.clone() class="doctor-photo"/>
                <div class="doctor-title">
                    <h2 class="doctor-name">{name}</h2>
                    <p class="doctor-department">{department}</p>
                </div>
            </div>
            <div class="doctor-details">
                <div class="detail-item">
                    <i class="ri-award-line"></i>
                    <div class="detail-content">
                        <div class="detail-label">"Qualification"</div>
                        <div class="detail-text">{qualification}</div>
                    </div>
                </div>
                <div class="detail-item">
                    <i class="ri-hospital-line"></i>
                    <div class="detail-content">
                        <div class="detail-label">"Clinic Address"</div>
                        <div class="detail-text">{address}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
