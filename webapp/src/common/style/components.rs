pub const PHOTO_MODAL: &str = r#"
/* Photo modal */

.photo-modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: var(--space-32);
  background-color: var(--backdrop);
  backdrop-filter: blur(4px);
}

.photo-modal {
  position: relative;
  max-width: 42rem;
  max-height: 90vh;
  margin: 0 var(--space-4) var(--space-20);
  overflow: hidden;
  background: linear-gradient(to bottom right, var(--sunset-yellow), var(--sunset-orange), var(--sunset-pink));
  backdrop-filter: blur(12px);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius-2xl);
  box-shadow: var(--shadow-2xl);
}

.photo-modal-dismiss {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  z-index: 10;
  width: 40px;
  height: 40px;
  display: flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--glass-button);
  color: white;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.photo-modal-dismiss:hover,
.photo-modal-close:hover {
  background-color: var(--glass-button-hover);
}

.photo-modal-body {
  display: flex;
  flex-direction: column;
}

.photo-modal-frame {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
}

.photo-modal-image {
  max-width: 100%;
  max-height: 70vh;
  object-fit: contain;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.photo-modal-info {
  padding: 0 var(--space-3) var(--space-3);
  color: white;
}

.photo-modal-title {
  margin-bottom: var(--space-2);
  font-size: 1rem;
  font-weight: 700;
  text-align: center;
}

.photo-modal-details {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin-bottom: var(--space-4);
}

.photo-modal-detail {
  flex: 1;
}

.photo-modal-label {
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.025em;
}

.photo-modal-value {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 3rem;
  padding: var(--space-2);
  font-size: 0.875rem;
  text-align: center;
}

.photo-modal-value.mono {
  font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
}

.photo-modal-actions {
  display: flex;
  justify-content: center;
}

.photo-modal-close {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--glass-button);
  color: white;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.icon-md {
  width: 24px;
  height: 24px;
}

.icon-sm {
  width: 20px;
  height: 20px;
}

/* stack the info sections on phones, side by side from 640px up */
@media (min-width: 640px) {
  .photo-modal-frame {
    padding: var(--space-6);
  }

  .photo-modal-image {
    max-height: 50vh;
  }

  .photo-modal-info {
    padding: 0 var(--space-6) var(--space-6);
  }

  .photo-modal-title {
    margin-bottom: var(--space-4);
    font-size: 1.125rem;
  }

  .photo-modal-details {
    flex-direction: row;
    gap: var(--space-6);
    margin-bottom: var(--space-6);
  }

  .photo-modal-label {
    margin-bottom: var(--space-2);
    font-size: 0.875rem;
  }

  .photo-modal-value {
    min-height: 4rem;
    padding: var(--space-3);
    font-size: 1.125rem;
    background-color: var(--glass-fill);
    border-radius: var(--radius-lg);
    backdrop-filter: blur(4px);
  }

  .photo-modal-close {
    padding: var(--space-3) var(--space-6);
    font-size: 1rem;
  }
}
"#;
