mod entropy_quality;
mod uniformity;
