pub const HOME_STYLES: &str = r#"
/* Marker list standing in for the map */

.home-container {
  max-width: 960px;
  margin: 0 auto;
  padding: var(--space-8) var(--space-4);
}

.home-title {
  margin-bottom: var(--space-6);
  font-size: 1.5rem;
  font-weight: 600;
}

.marker-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-4);
  list-style: none;
}

.marker-button {
  width: 100%;
  padding: var(--space-4);
  text-align: left;
  border: 1px solid var(--neutral-200);
  border-radius: var(--radius-xl);
  background-color: white;
  color: var(--text-primary);
  cursor: pointer;
}

.marker-button:hover {
  border-color: var(--sunset-orange);
}

.marker-name {
  display: block;
  font-weight: 600;
}

.marker-location {
  display: block;
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--neutral-700);
}

.empty-state {
  color: var(--neutral-700);
}
"#;
